//! Macro for implementing Display and FromStr for status enums
//!
//! Eliminates boilerplate for ticket status and priority conversions by
//! providing a single implementation of both Display and FromStr. Parsing
//! is case-insensitive; output is the canonical lowercase wire string.
//!
//! # Example
//!
//! ```rust
//! use helpdesk_domain::impl_status_str_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum TicketState {
//!     Abierto,
//!     EnProceso,
//!     Cerrado,
//! }
//!
//! impl_status_str_conversions!(TicketState {
//!     Abierto => "abierto",
//!     EnProceso => "en_proceso",
//!     Cerrado => "cerrado",
//! });
//! ```

/// Implements Display and FromStr traits for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
#[macro_export]
macro_rules! impl_status_str_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
