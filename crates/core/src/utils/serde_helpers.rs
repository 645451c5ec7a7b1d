//! Serde utility helpers for case-insensitive deserialization

/// Macro to implement case-insensitive deserialization for unit enums
///
/// Usage:
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     Separator,
///     Backslash => "backslash",
///     Slash => "slash"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Flavor {
        Plain,
        DoubleQuoted,
    }

    impl_case_insensitive_deserialize!(
        Flavor,
        Plain => "plain",
        DoubleQuoted => "doublequoted"
    );

    #[test]
    fn test_case_insensitive_deserialize() {
        let result: Flavor = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(result, Flavor::Plain);

        let result: Flavor = serde_json::from_str(r#""PLAIN""#).unwrap();
        assert_eq!(result, Flavor::Plain);

        let result: Flavor = serde_json::from_str(r#""DoubleQuoted""#).unwrap();
        assert_eq!(result, Flavor::DoubleQuoted);

        let result: Result<Flavor, _> = serde_json::from_str(r#""single""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown variant 'single'"));
        assert!(err.contains("expected one of: plain, doublequoted"));
    }
}
