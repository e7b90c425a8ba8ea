use greeter_common::name::UserName;

pub const PROMPT: &str = "What's your name?";
pub const NO_NAME: &str = "You didn't enter a name.";

pub fn greeting(name: &UserName) -> String {
    format!("Hello, {}! 👋", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_template() {
        let ada = UserName::from_response(Some("Ada".to_string())).unwrap();
        assert_eq!(greeting(&ada), "Hello, Ada! 👋");

        let odd = UserName::from_response(Some("{name}".to_string())).unwrap();
        assert_eq!(greeting(&odd), "Hello, {name}! 👋");
    }
}
