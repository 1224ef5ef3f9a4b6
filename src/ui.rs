use colored::*;

// Plain confirmation text, without terminal styling
pub fn reset_message(file: &str, username: &str, password: &str) -> String {
    format!("{file} and created admin user '{username}' with password '{password}'")
}

pub fn reset_confirmation_ui(file: &str, username: &str, password: &str) {
    println!(
        "{} {}",
        "Reset".color(Color::BrightGreen).bold(),
        reset_message(file, username, password)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_message_text() {
        let msg = format!("Reset {}", reset_message(".users.json", "Methembe", "1111"));
        assert_eq!(
            msg,
            "Reset .users.json and created admin user 'Methembe' with password '1111'"
        );
    }
}
