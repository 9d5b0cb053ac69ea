//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: create a complete validator (struct + Validate impl + factory fn)
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     /// Accepts only non-blank strings.
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::new("not_blank", "Cannot be blank.") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate("x").is_ok());
//! assert!(not_blank().validate("  ").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub CreditCard for str;
///     rule(input) { is_known_card(input) }
///     error(input) { ValidationError::invalid_format("credit card") }
///     fn credit_card();
/// }
/// ```
///
/// **Struct with fields and a constructor**:
/// ```rust,ignore
/// validator! {
///     pub Equals { expected: String } for str;
///     rule(self, input) { input == self.expected }
///     error(self, input) { ValidationError::new("equals", "Values do not match.") }
///     new(expected: impl Into<String>) { Self { expected: expected.into() } }
///     fn equals(expected: impl Into<String>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator (no fields) + factory fn ──────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator (no fields), no factory ───────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + constructor + factory fn ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + constructor, no factory ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError};

    crate::validator! {
        /// Accepts strings that start with an uppercase ASCII letter.
        pub Capitalized for str;
        rule(input) { input.starts_with(|c: char| c.is_ascii_uppercase()) }
        error(input) { ValidationError::new("capitalized", "Must start with a capital letter.") }
        fn capitalized();
    }

    crate::validator! {
        /// Accepts strings with the given prefix.
        #[derive(PartialEq, Eq)]
        pub Prefixed { prefix: String } for str;
        rule(self, input) { input.starts_with(&self.prefix) }
        error(self, input) {
            ValidationError::new("prefixed", format!("Must start with '{}'.", self.prefix))
                .with_param("prefix", self.prefix.clone())
        }
        new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
        fn prefixed(prefix: impl Into<String>);
    }

    #[test]
    fn test_unit_validator() {
        assert!(capitalized().validate("Alice").is_ok());
        let err = capitalized().validate("alice").unwrap_err();
        assert_eq!(err.code, "capitalized");
    }

    #[test]
    fn test_struct_validator() {
        let v = prefixed("usr_");
        assert!(v.validate("usr_42").is_ok());
        let err = v.validate("adm_42").unwrap_err();
        assert_eq!(err.param("prefix"), Some("usr_"));
        assert_eq!(v, Prefixed::new("usr_"));
    }
}
