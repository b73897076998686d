/// Implements the `From` conversions shared by every composite geometry:
/// owned and borrowed vectors, slices and fixed-size arrays of anything the
/// element type can be built from.
#[macro_export]
macro_rules! impl_from_array {
	($($t:ty,$i:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$i>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$i: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map(|v| <$i>::from(v)).collect())
			}
		}
	)*}
}

/// Implements `CompositeGeometryTrait` for a tuple struct wrapping a `Vec`.
#[macro_export]
macro_rules! impl_composite {
	($($t:ty,$i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn as_vec(&self) -> &Vec<$i> {
				&self.0
			}
			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}
	)*}
}
