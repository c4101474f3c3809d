//! Static value-object generation.
//!
//! The dynamic [`Factory`](crate::Factory) validates at runtime; the
//! [`value_object!`] macro moves the same checks to compile time. A missing
//! required field is a constructor arity error, and a write to a
//! constructed value is rejected because fields are private and no mutating
//! method exists.

/// Generates an immutable value object type with a companion builder.
///
/// Required fields become parameters of `new`, in declaration order;
/// defaulted fields are filled from their default expressions. The builder
/// has one setter per field, named after the field; each setter borrows the
/// receiver and returns a new builder, so earlier builders stay usable.
/// `build` is infallible - the builder always holds a full field set.
///
/// Both the `required` and `defaults` blocks must be present, but either
/// may be empty. Attributes written above the struct (doc comments, extra
/// derives such as serde's) are carried onto the generated type, alongside
/// the built-in `Debug`, `Clone`, and `PartialEq` derives.
///
/// ```
/// use anvil_values::value_object;
///
/// value_object! {
///     /// A physical measurement.
///     pub struct Measurement {
///         builder MeasurementBuilder;
///         required { magnitude: u32 }
///         defaults { unit: String = "cm".to_owned() }
///     }
/// }
///
/// let m = Measurement::new(100);
/// assert_eq!(m.unit(), "cm");
///
/// let scaled = m.to_builder().magnitude(200).unit("ft".to_owned()).build();
/// assert_eq!(*scaled.magnitude(), 200);
/// assert_eq!(*m.magnitude(), 100);
/// ```
///
/// Omitting a required field is a compile error - `new` takes exactly the
/// required fields:
///
/// ```compile_fail
/// use anvil_values::value_object;
///
/// value_object! {
///     pub struct Measurement {
///         builder MeasurementBuilder;
///         required { magnitude: u32 }
///         defaults { unit: &'static str = "cm" }
///     }
/// }
///
/// let measurement = Measurement::new(); // magnitude is required
/// ```
///
/// So is a write to a constructed value - fields are private and no
/// mutating method exists:
///
/// ```compile_fail
/// mod shapes {
///     use anvil_values::value_object;
///
///     value_object! {
///         pub struct Measurement {
///             builder MeasurementBuilder;
///             required { magnitude: u32 }
///             defaults { unit: &'static str = "cm" }
///         }
///     }
/// }
///
/// let mut measurement = shapes::Measurement::new(100);
/// measurement.magnitude = 200;
/// ```
#[macro_export]
macro_rules! value_object {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            builder $builder:ident;
            required { $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty ),* $(,)? }
            defaults { $( $(#[$dmeta:meta])* $dfield:ident : $dty:ty = $default:expr ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $(#[$rmeta])* $rfield: $rty, )*
            $( $(#[$dmeta])* $dfield: $dty, )*
        }

        impl $name {
            /// Constructs the value from its required fields; defaulted
            /// fields take their defaults.
            #[must_use]
            $vis fn new( $( $rfield: $rty ),* ) -> Self {
                Self {
                    $( $rfield, )*
                    $( $dfield: $default, )*
                }
            }

            $(
                #[must_use]
                $vis fn $rfield(&self) -> &$rty {
                    &self.$rfield
                }
            )*

            $(
                #[must_use]
                $vis fn $dfield(&self) -> &$dty {
                    &self.$dfield
                }
            )*

            /// Builder seeded with this value's current fields.
            #[must_use]
            $vis fn to_builder(&self) -> $builder {
                $builder {
                    snapshot: self.clone(),
                }
            }
        }

        #[doc = concat!("Fluent builder for [`", stringify!($name), "`].")]
        ///
        /// Each setter returns a new builder; the receiver is unchanged.
        #[derive(Debug, Clone)]
        $vis struct $builder {
            snapshot: $name,
        }

        impl $builder {
            $(
                #[must_use]
                $vis fn $rfield(&self, value: $rty) -> Self {
                    let mut snapshot = self.snapshot.clone();
                    snapshot.$rfield = value;
                    Self { snapshot }
                }
            )*

            $(
                #[must_use]
                $vis fn $dfield(&self, value: $dty) -> Self {
                    let mut snapshot = self.snapshot.clone();
                    snapshot.$dfield = value;
                    Self { snapshot }
                }
            )*

            /// Materializes a new immutable value object.
            #[must_use]
            $vis fn build(&self) -> $name {
                self.snapshot.clone()
            }
        }
    };
}
