use super::{Coordinates, Dimension};
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
///
/// Implementors only provide the two coordinate walkers; everything else is derived from them.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Calls `f` for every position, in storage order.
	fn visit_coords<F: FnMut(&Coordinates)>(&self, f: &mut F);

	/// Returns a copy of the geometry with every position replaced by `f(position)`.
	/// The structure (rings, parts, members) is left untouched.
	fn map_coords<F: Fn(&Coordinates) -> Coordinates>(&self, f: &F) -> Self;

	/// Returns the dimension of the first position, or `None` if the geometry has no positions.
	fn dimension(&self) -> Option<Dimension> {
		let mut dimension = None;
		self.visit_coords(&mut |c| {
			if dimension.is_none() {
				dimension = Some(c.dimension());
			}
		});
		dimension
	}

	/// Checks whether all positions share one dimension. Empty geometries are uniform.
	fn is_uniform(&self) -> bool {
		let mut first = None;
		let mut uniform = true;
		self.visit_coords(&mut |c| match first {
			None => first = Some(c.dimension()),
			Some(d) => uniform &= d == c.dimension(),
		});
		uniform
	}

	/// Returns the total number of positions.
	fn num_points(&self) -> usize {
		let mut count = 0;
		self.visit_coords(&mut |_| count += 1);
		count
	}

	/// Compute the bounding box of this geometry.
	///
	/// Returns `Some([x_min, y_min, x_max, y_max])`, or `None` if the geometry is empty.
	fn compute_bounds(&self) -> Option<[f64; 4]> {
		let mut bounds: Option<[f64; 4]> = None;
		self.visit_coords(&mut |c| {
			let b = bounds.get_or_insert([c.x(), c.y(), c.x(), c.y()]);
			b[0] = b[0].min(c.x());
			b[1] = b[1].min(c.y());
			b[2] = b[2].max(c.x());
			b[3] = b[3].max(c.y());
		});
		bounds
	}

	/// Returns a copy with the `z` component of every position removed.
	fn to_2d(&self) -> Self {
		self.map_coords(&Coordinates::to_2d)
	}
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
///
/// Composites are built in one step from a `Vec` and only give read access afterwards.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over owned elements of the composite geometry.
	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	/// Splits the composite geometry into its first element and the rest, if available.
	fn into_first_and_rest(self) -> Option<(Item, Vec<Item>)> {
		let mut iter = self.into_iter();
		iter.next().map(|first| (first, iter.collect()))
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Returns a reference to the element at `index`, if any.
	fn get(&self, index: usize) -> Option<&Item> {
		self.as_vec().get(index)
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
