//! Helper macro for generating domain port error enums.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    $(
                        #[doc = concat!("The `", stringify!($field), "` field.")]
                        $field : $ty
                    ),*
                },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = concat!("Helper constructor for [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Example error used to exercise the macro expansion.
        pub enum ExamplePortError {
            /// String-field variant.
            Transport { message: String } => "transport: {message}",
            /// Multi-field variant.
            Rejected { recipient: String, reason: String } => "rejected for {recipient}: {reason}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::transport("socket closed");
        assert_eq!(err.to_string(), "transport: socket closed");
    }

    #[test]
    fn constructors_support_multiple_fields() {
        let err = ExamplePortError::rejected("u-1", "unknown token");
        assert_eq!(err.to_string(), "rejected for u-1: unknown token");
    }
}
