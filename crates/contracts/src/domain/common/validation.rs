//! Small field checks shared by the DTO `validate` methods

/// Required text field with an inclusive character-length range
pub fn require_len(label: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(format!("{} is required", label));
    }
    if len < min || len > max {
        return Err(format!(
            "{} must be between {} and {} characters",
            label, min, max
        ));
    }
    Ok(())
}

/// Optional text field with an upper bound
pub fn max_len(label: &str, value: Option<&str>, max: usize) -> Result<(), String> {
    match value {
        Some(v) if v.trim().chars().count() > max => {
            Err(format!("{} must not exceed {} characters", label, max))
        }
        _ => Ok(()),
    }
}

/// Loose `local@domain.tld` shape check, no whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Treat blank optional inputs as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_len_checks_blank_and_bounds() {
        assert_eq!(require_len("Name", "  ", 2, 5), Err("Name is required".into()));
        assert!(require_len("Name", "a", 2, 5).is_err());
        assert!(require_len("Name", "abcdef", 2, 5).is_err());
        assert!(require_len("Name", " ab ", 2, 5).is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("vet@example.lk"));
        assert!(!is_valid_email("vet@example"));
        assert!(!is_valid_email("@example.lk"));
        assert!(!is_valid_email("vet example@x.lk"));
        assert!(!is_valid_email("a@b@c.lk"));
        assert!(!is_valid_email("vet@.lk"));
    }

    #[test]
    fn non_blank_drops_whitespace_only() {
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some(" x ".into())), Some("x".into()));
        assert_eq!(non_blank(None), None);
    }
}
