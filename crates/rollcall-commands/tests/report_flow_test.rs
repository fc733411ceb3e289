//! End-to-end scenarios over the reconciler and response shaper

use rollcall_commands::reconcile::{self, EmptyReason, GuildMemberView, Report};
use rollcall_commands::respond;
use rollcall_data::RegisteredUser;

const GUILD: u64 = 400;

fn human(user_id: u64) -> GuildMemberView {
    GuildMemberView {
        user_id,
        is_bot: false,
        display_name: format!("member-{user_id}"),
        mention: format!("<@{user_id}>"),
        role_mentions: vec!["<@&9001>".to_string()],
    }
}

fn bot(user_id: u64) -> GuildMemberView {
    GuildMemberView {
        is_bot: true,
        ..human(user_id)
    }
}

/// Ten humans, two bots, six registrations (one with two characters),
/// four unregistered
fn scenario_guild() -> (Vec<GuildMemberView>, Vec<RegisteredUser>) {
    let mut members: Vec<GuildMemberView> = (1..=10).map(human).collect();
    members.push(bot(11));
    members.push(bot(12));

    let mut records: Vec<RegisteredUser> = Vec::new();
    records.push(RegisteredUser::new(GUILD, 1, "member-1").with_character("Alpha"));
    records.push(
        RegisteredUser::new(GUILD, 2, "member-2")
            .with_character("Bravo")
            .with_character("Charlie"),
    );
    records.push(RegisteredUser::new(GUILD, 3, "member-3"));
    records.push(RegisteredUser::new(GUILD, 4, "member-4").with_character("Delta"));
    records.push(RegisteredUser::new(GUILD, 5, "member-5"));
    records.push(RegisteredUser::new(GUILD, 6, "member-6").with_character("Echo"));

    (members, records)
}

#[test]
fn test_scenario_stats() {
    let (members, records) = scenario_guild();

    match reconcile::stats(&members, &records) {
        Report::Data(stats) => {
            assert_eq!(stats.total, 10);
            assert_eq!(stats.registered, 6);
            assert_eq!(stats.unregistered, 4);
            assert_eq!(stats.characters, 5);
        }
        other => panic!("expected data, got {:?}", other),
    }
}

#[test]
fn test_scenario_unregistered_listing() {
    let (members, records) = scenario_guild();

    let missing = match reconcile::unregistered(&members, &records) {
        Report::Data(missing) => missing,
        other => panic!("expected data, got {:?}", other),
    };

    let mentions: Vec<&str> = missing.iter().map(|m| m.mention.as_str()).collect();
    assert_eq!(mentions, vec!["<@7>", "<@8>", "<@9>", "<@10>"]);

    // Shape the listing the way the command does and check the join
    let mut fragments = vec!["Unregistered members (4):\n".to_string()];
    let last = missing.len() - 1;
    for (i, member) in missing.iter().enumerate() {
        if i == last {
            fragments.push(member.mention.clone());
        } else {
            fragments.push(format!("{}, ", member.mention));
        }
    }

    let messages = respond::pack(&fragments, respond::MAX_MESSAGE_LEN).unwrap();
    assert_eq!(
        messages.concat(),
        "Unregistered members (4):\n<@7>, <@8>, <@9>, <@10>"
    );
}

#[test]
fn test_scenario_registered_listing_with_departed_member() {
    let (mut members, records) = scenario_guild();

    // Member 6 leaves the guild; their registration goes stale
    members.retain(|m| m.user_id != 6);

    let listing = match reconcile::registered(&members, &records) {
        Report::Data(listing) => listing,
        other => panic!("expected data, got {:?}", other),
    };

    assert_eq!(listing.rows.len(), 5);
    assert_eq!(listing.skipped.len(), 1);
    assert_eq!(listing.skipped[0].user_name, "member-6");
    assert_eq!(listing.record_count(), 6);

    let row = &listing.rows[1];
    assert_eq!(row.mention, "<@2>");
    assert_eq!(row.characters, "Bravo, Charlie");
}

#[test]
fn test_scenario_empty_guild_records() {
    let (members, _) = scenario_guild();

    assert_eq!(
        reconcile::registered(&members, &[]),
        Report::Empty(EmptyReason::NoRegisteredUsers)
    );

    match reconcile::unregistered(&members, &[]) {
        Report::Data(missing) => assert_eq!(missing.len(), 10),
        other => panic!("expected data, got {:?}", other),
    }
}

#[test]
fn test_scenario_long_listing_spans_messages() {
    // Enough per-member lines to exceed one Discord message
    let fragments: Vec<String> = (0..200)
        .map(|i| format!("* <@{i}> (<@&9001>): Character-{i}\n"))
        .collect();

    let messages = respond::pack(&fragments, respond::MAX_MESSAGE_LEN).unwrap();

    assert!(messages.len() > 1);
    assert!(messages
        .iter()
        .all(|m| m.chars().count() <= respond::MAX_MESSAGE_LEN));
    assert_eq!(messages.concat(), fragments.concat());
}

#[test]
fn test_scenario_oversized_line_fails_shaping() {
    let fragments = vec!["x".repeat(respond::MAX_MESSAGE_LEN + 1)];

    assert!(matches!(
        respond::pack(&fragments, respond::MAX_MESSAGE_LEN),
        Err(respond::ShapeError::FragmentTooLarge { .. })
    ));
}
