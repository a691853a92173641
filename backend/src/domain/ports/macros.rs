//! Helper macro for declaring port error enums.
//!
//! Each variant becomes a `thiserror` variant plus a snake-case constructor
//! whose fields accept anything `Into` the declared type, so adapters can
//! write `DonationPersistenceError::query("...")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum LedgerPortError {
            Unreachable => "ledger unreachable",
            Connection { message: String } => "ledger connection failed: {message}",
            Rejected { donor: String, amount: i64 } => "ledger rejected {amount} for {donor}",
        }
    }

    #[test]
    fn unit_variants_get_snake_case_constructors() {
        let err = LedgerPortError::unreachable();
        assert_eq!(err.to_string(), "ledger unreachable");
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = LedgerPortError::connection("socket closed");
        assert_eq!(err.to_string(), "ledger connection failed: socket closed");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = LedgerPortError::rejected("Ada", 40_i64);
        assert_eq!(err, LedgerPortError::Rejected { donor: "Ada".to_owned(), amount: 40 });
        assert_eq!(err.to_string(), "ledger rejected 40 for Ada");
    }
}
