//! Enum declaration macro.
//!
//! `declare_enum!` is the definition-time counterpart of dynamic accessor
//! resolution: it declares the marker type, supplies its definition
//! source, and generates one explicit accessor per entry so the concrete
//! type is usable as a static namespace.

/// Declare a concrete enum type with scalar entries.
///
/// ```
/// use enumera::{Enumerated, declare_enum};
///
/// declare_enum! {
///     /// Lifecycle state of a record.
///     pub enum Status {
///         ACTIVE => "active",
///         INACTIVE => "inactive",
///     }
/// }
///
/// let active = Status::ACTIVE();
/// assert_eq!(active.name(), Some("ACTIVE"));
/// assert!(active.is("active"));
/// assert!(Status::is_valid("inactive"));
/// ```
#[macro_export]
macro_rules! declare_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $( $entry:ident => $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $ty;

        impl $crate::Enumerated for $ty {
            const NAME: &'static str = stringify!($ty);

            fn definition() -> $crate::Definition {
                $crate::Definition::mapping([
                    $( (stringify!($entry), $crate::Value::from($value)) ),+
                ])
            }
        }

        #[allow(non_snake_case)]
        impl $ty {
            $(
                /// Accessor bound to the entry of the same name.
                $vis fn $entry() -> $crate::Member<$ty> {
                    <$ty as $crate::Enumerated>::make_with(stringify!($entry), $value)
                }
            )+
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::Enumerated;

    declare_enum! {
        /// Compass directions, declared through the macro.
        pub enum Compass {
            NORTH => "north",
            SOUTH => "south",
        }
    }

    #[test]
    fn the_macro_wires_definition_and_accessors() {
        assert_eq!(Compass::keys(), vec!["NORTH", "SOUTH"]);

        let north = Compass::NORTH();
        assert_eq!(north.name(), Some("NORTH"));
        assert_eq!(north.to_string(), "north");
        assert!(north.is("north"));
        assert!(!north.is("SOUTH"));
    }

    #[test]
    fn generated_accessors_agree_with_make() {
        let made = Compass::make("south").unwrap();
        assert!(Compass::SOUTH().equals(&made));
    }
}
