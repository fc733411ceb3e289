//! Verifies all locale files expose the full message surface

use rollcall_i18n::{fluent_args, I18nError, I18nManager, Locale};

const LOCALES_DIR: &str = "../../locales";

fn manager_with_all_locales() -> I18nManager {
    let mut manager = I18nManager::new(Locale::English, LOCALES_DIR).unwrap();
    for locale in Locale::all() {
        if locale != Locale::English {
            manager.load_locale(&locale).unwrap();
        }
    }
    manager
}

#[test]
fn test_all_locales_have_same_messages() {
    let manager = manager_with_all_locales();

    let plain_messages = vec![
        "guild-only",
        "members-not-visible",
        "something-went-wrong",
        "no-unregistered",
        "no-registered",
    ];

    for locale in Locale::all() {
        for message_key in &plain_messages {
            let result = manager.get_message(message_key, &locale, None);
            assert!(
                result.is_ok(),
                "Message '{}' not found in locale {:?}: {:?}",
                message_key,
                locale,
                result
            );
        }
    }
}

#[test]
fn test_parameter_substitution_works() {
    let manager = manager_with_all_locales();

    for locale in Locale::all() {
        let args = fluent_args![
            "total" => 10,
            "registered" => 6,
            "unregistered" => 4,
            "characters" => 7,
        ];
        let message = manager
            .get_message("reports-stats", &locale, args.as_ref())
            .unwrap();
        for count in ["10", "6", "4", "7"] {
            assert!(
                message.contains(count),
                "reports-stats missing count {} in locale {:?}: '{}'",
                count,
                locale,
                message
            );
        }

        let args = fluent_args!["count" => 3];
        let header = manager
            .get_message("unregistered-header", &locale, args.as_ref())
            .unwrap();
        assert!(header.contains('3'));
    }
}

#[test]
fn test_messages_differ_between_locales() {
    let manager = manager_with_all_locales();

    let english = manager
        .get_message("guild-only", &Locale::English, None)
        .unwrap();
    let russian = manager
        .get_message("guild-only", &Locale::Russian, None)
        .unwrap();
    assert_ne!(english, russian);
}

#[test]
fn test_unknown_key_is_an_error() {
    let manager = manager_with_all_locales();

    let result = manager.get_message("no-such-key", &Locale::Russian, None);
    assert!(matches!(result, Err(I18nError::MessageNotFound { .. })));
}

#[test]
fn test_get_message_or_default_falls_back() {
    let manager = manager_with_all_locales();

    let text = manager.get_message_or_default("no-such-key", &Locale::English, None, "fallback");
    assert_eq!(text, "fallback");
}
