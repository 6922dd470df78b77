use super::Vector;

#[cfg(feature = "serde")]
use crate::BincodeConfiguration;

/// ### -> `Length Trait`.
///
/// Length queries and length-only comparisons, split off from the element
/// surface so that code which only sizes containers against each other
/// does not need element bounds.
///
/// ### -> `Usage`
///
/// ```
/// use semivec::vector::prelude::*;
///
/// let a = Vector::from(vec![1, 2, 3]);
/// let b = Vector::from(vec![4, 5, 6]);
///
/// assert_eq!(a.length(), 3);
/// assert!(a.length_eq(&b));
/// assert_eq!(a.length_cmp(&b), Some(std::cmp::Ordering::Equal));
/// ```
pub trait Length {
    fn length(&self) -> usize;
    fn length_eq(&self, other: &Self) -> bool;
    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering>;
}

impl<T> Length for Vector<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
    }

    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.len().partial_cmp(&other.len())
    }
}

/// ### -> `Snapshot<T> Trait`.
///
/// Produces an independent `Vec<T>` copy of the current contents. The
/// snapshot shares nothing with the source: later mutations of either
/// side are invisible to the other.
///
/// ### -> `Usage`
///
/// ```
/// use semivec::vector::prelude::*;
///
/// let mut values = Vector::from(vec![1, 2, 3]);
/// let snapshot = values.snapshot();
/// values.push(4);
///
/// assert_eq!(snapshot, vec![1, 2, 3]);
/// assert_eq!(values.length(), 4);
/// ```
pub trait Snapshot<T>
where
    T: Clone,
{
    #[must_use = "Snapshot output must serve a purpose!"]
    fn snapshot(&self) -> Vec<T>;
}

impl<T: Clone> Snapshot<T> for Vector<T> {
    fn snapshot(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

/// ### -> `Bincode<T> Trait`.
///
/// Binary serialization of the element sequence via `bincode`, with the
/// layout chosen by [`BincodeConfiguration`]: `Standard` for the current
/// default encoding, `Legacy` for the 1.x-compatible layout. Decoding
/// rebuilds a fresh container with a fresh mutation chain.
///
/// ### -> `Usage`
///
/// ```
/// use semivec::vector::prelude::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let values = Vector::from(vec![1u32, 2, 3]);
/// let bytes = values.to_bincode(&BincodeConfiguration::Standard)?;
/// let restored = Vector::<u32>::from_bincode(&bytes, &BincodeConfiguration::Standard)?;
///
/// assert_eq!(values, restored);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "serde")]
pub trait Bincode<T>: Snapshot<T>
where
    T: Clone,
{
    #[must_use = "Bincode serialization output must serve a purpose!"]
    fn to_bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize;

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        Self: Sized,
        T: serde::de::DeserializeOwned;
}

#[cfg(feature = "serde")]
impl<T: Clone> Bincode<T> for Vector<T> {
    fn to_bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: serde::Serialize,
    {
        let bytes = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::encode_to_vec(self.as_slice(), bincode::config::standard())?
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::encode_to_vec(self.as_slice(), bincode::config::legacy())?
            }
        };
        Ok(bytes)
    }

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        let values: Vec<T> = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::decode_from_slice(bytes, bincode::config::standard())?.0
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::decode_from_slice(bytes, bincode::config::legacy())?.0
            }
        };
        Ok(Self::from(values))
    }
}
