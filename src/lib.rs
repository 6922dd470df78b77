/// Selects the byte layout used by the `Bincode` trait when the `serde`
/// feature is enabled. `Standard` is the current default encoding;
/// `Legacy` matches the layout of the 1.x wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BincodeConfiguration {
    Standard,
    Legacy,
}

#[macro_export]
macro_rules! drop {
    ($($x:expr),* $(,)?) => {
        $( std::mem::drop($x); )*
    };
}

#[cfg(feature = "vector")]
pub mod vector;
