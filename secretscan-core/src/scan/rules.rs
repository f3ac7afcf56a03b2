use regex::Regex;

/// Built-in detection patterns: `(id, description, pattern)`.
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "aws_access_key_id",
        "AWS access key identifier",
        r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b",
    ),
    (
        "private_key",
        "PEM encoded private key",
        r"-----BEGIN (?:RSA |EC |DSA |OPENSSH |PGP )?PRIVATE KEY(?: BLOCK)?-----",
    ),
    (
        "github_token",
        "GitHub access token",
        r"\bgh[pousr]_[A-Za-z0-9]{36,}\b",
    ),
    (
        "slack_token",
        "Slack API token",
        r"\bxox[abprs]-[A-Za-z0-9-]{10,}\b",
    ),
    (
        "generic_secret_assignment",
        "Hard-coded credential assignment",
        r#"(?i)\b(?:api[_-]?key|secret|passwd|password|token)\b\s*[:=]\s*['"][^'"\s]{8,}['"]"#,
    ),
];

#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    pattern: Regex,
}

impl Rule {
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn builtin() -> Result<Self, regex::Error> {
        let rules = BUILTIN_RULES
            .iter()
            .map(|&(id, description, pattern)| {
                Ok::<_, regex::Error>(Rule {
                    id,
                    description,
                    pattern: Regex::new(pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn matching<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.is_match(line))
    }
}
