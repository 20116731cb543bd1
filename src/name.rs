/// Types that expose a comparable name.
pub trait HasName {
    fn get_name(&self) -> &str;
}

// Delegate HasName to references and shared handles
impl<T: HasName + ?Sized> HasName for &T {
    fn get_name(&self) -> &str {
        (*self).get_name()
    }
}
impl<T: HasName + ?Sized> HasName for std::rc::Rc<T> {
    fn get_name(&self) -> &str {
        (**self).get_name()
    }
}

/// Sorting helpers for slices of `T: HasName`.
pub trait SortByName {
    /// Stable, ascending sort by `get_name()`.
    fn sort_by_name(&mut self);
}

impl<T: HasName> SortByName for [T] {
    fn sort_by_name(&mut self) {
        self.sort_by(|a, b| a.get_name().cmp(b.get_name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Construction, MaterialLayer};
    use std::rc::Rc;

    #[test]
    fn test_has_name_rc() {
        let c = Rc::new(Construction::opaque("c1", "Brick", vec![]));
        assert_eq!(c.get_name(), "Brick");
    }

    #[test]
    fn test_sort_constructions_by_name() {
        let mut items = vec![
            Rc::new(Construction::opaque("c", "Roof slab", vec![])),
            Rc::new(Construction::opaque("a", "Brick wall", vec![])),
            Rc::new(Construction::opaque("b", "Curtain wall", vec![])),
        ];
        items.as_mut_slice().sort_by_name();
        let names: Vec<&str> = items.iter().map(|c| c.get_name()).collect();
        assert_eq!(names, ["Brick wall", "Curtain wall", "Roof slab"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut layers = vec![
            MaterialLayer::new("plaster", 0.72, 15.),
            MaterialLayer::new("brick", 0.81, 100.),
            MaterialLayer::new("plaster", 0.50, 10.),
        ];
        layers.as_mut_slice().sort_by_name();
        assert_eq!(layers[0].get_name(), "brick");
        assert_eq!(layers[1].conductivity, 0.72);
        assert_eq!(layers[2].conductivity, 0.50);
    }
}
