//! Environment provider that reads comma-separated lists.
//!
//! `LANGWALK_LOCALES=en,fr,de` becomes an array so it deserialises into the
//! `locales` list. Values starting with `[`, `{` or a quote are left to
//! figment's own parser.

use figment::providers::Env;
use figment::{
    Metadata, Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};

/// Prefixed environment provider with list support.
#[derive(Clone)]
pub(crate) struct ListEnv {
    inner: Env,
}

impl ListEnv {
    pub(crate) fn prefixed(prefix: &str) -> Self {
        Self {
            inner: Env::prefixed(prefix),
        }
    }

    fn is_list(value: &str) -> bool {
        value.contains(',') && !matches!(value.chars().next(), Some('[' | '{' | '"' | '\''))
    }

    fn parse_value(raw: &str) -> Value {
        let trimmed = raw.trim();
        if Self::is_list(trimmed) {
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::from(item.to_owned()))
                .collect::<Vec<_>>()
                .into()
        } else {
            trimmed
                .parse()
                .unwrap_or_else(|_| Value::from(trimmed.to_owned()))
        }
    }
}

impl Provider for ListEnv {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let Some(nested) = nest(key.as_str(), Self::parse_value(&raw)).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::list("en,fr", true)]
    #[case::single("en", false)]
    #[case::json_array("[\"en\",\"fr\"]", false)]
    #[case::quoted("\"a,b\"", false)]
    fn detects_lists(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(ListEnv::is_list(value), expected);
    }

    #[rstest]
    fn list_items_are_trimmed() {
        let value = ListEnv::parse_value(" en , fr ,");
        let items: Vec<String> = value.deserialize().expect("array of strings");
        assert_eq!(items, ["en", "fr"]);
    }

    #[rstest]
    fn profile_follows_inner_provider() {
        let env = ListEnv::prefixed("LANGWALK_");
        assert_eq!(env.profile(), Some(env.inner.profile.clone()));
        assert_eq!(env.profile(), Some(Profile::Default));
    }

    #[rstest]
    fn scalars_use_figment_parsing() {
        let value = ListEnv::parse_value("12");
        let depth: i32 = value.deserialize().expect("integer");
        assert_eq!(depth, 12);
    }
}
