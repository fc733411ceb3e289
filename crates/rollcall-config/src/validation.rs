//! Validation utilities for configuration values

use validator::ValidationError;

/// Validate Discord token format (basic check)
pub fn validate_discord_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::new("empty_discord_token"));
    }

    // Discord bot tokens have a dot-separated structure: bot_id.timestamp.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() == 3 && parts.iter().all(|part| !part.is_empty()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_discord_token_format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_discord_token() {
        // Valid token shapes
        assert!(validate_discord_token("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA.AbCdEf.GhIjKl").is_ok());
        assert!(validate_discord_token("a.b.c").is_ok());

        // Invalid token shapes
        assert!(validate_discord_token("").is_err());
        assert!(validate_discord_token("no-dots-here").is_err());
        assert!(validate_discord_token("only.one-dot").is_err());
        assert!(validate_discord_token("too.many.dots.here").is_err());
        assert!(validate_discord_token("empty..part").is_err());
    }
}
