/// How absent keys are treated while building a [`super::model::SiteConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Absent keys fail the load.
    #[default]
    Strict,
    /// Absent keys are filled with the empty string.
    Lenient,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Strict => write!(f, "strict"),
            ValidationPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(ValidationPolicy::Strict),
            "lenient" => Ok(ValidationPolicy::Lenient),
            _ => Err(format!("Invalid validation policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_strict() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
    }

    #[test]
    fn should_parse_policy_names() {
        assert_eq!("lenient".parse(), Ok(ValidationPolicy::Lenient));
        assert_eq!("strict".parse(), Ok(ValidationPolicy::Strict));
        assert!("loose".parse::<ValidationPolicy>().is_err());
    }
}
