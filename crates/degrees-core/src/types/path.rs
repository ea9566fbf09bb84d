//! Search result path types.

use serde::{Deserialize, Serialize};

use super::ids::{MovieId, PersonId};

/// One link-hop in a connection path: the movie traversed and the person
/// reached through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Hop {
    pub fn new(movie: MovieId, person: PersonId) -> Self {
        Self { movie, person }
    }
}

/// An ordered source→target hop sequence. The source itself is not an
/// element; callers that want the full walk prepend it.
///
/// Constructed once per successful search and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    hops: Vec<Hop>,
}

impl Path {
    /// The zero-hop path (source == target).
    pub fn empty() -> Self {
        Self { hops: Vec::new() }
    }

    pub fn from_hops(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// Degree of separation: number of hops from source to target.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// The final person in the path, i.e. the search target. `None` for the
    /// zero-hop path.
    pub fn target(&self) -> Option<&PersonId> {
        self.hops.last().map(|hop| &hop.person)
    }
}

impl IntoIterator for Path {
    type Item = Hop;
    type IntoIter = std::vec::IntoIter<Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_has_zero_degrees() {
        let path = Path::empty();
        assert_eq!(path.len(), 0);
        assert!(path.is_empty());
        assert!(path.target().is_none());
    }

    #[test]
    fn test_target_is_last_hop_person() {
        let path = Path::from_hops(vec![
            Hop::new(MovieId::from("m1"), PersonId::from("b")),
            Hop::new(MovieId::from("m2"), PersonId::from("c")),
        ]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.target(), Some(&PersonId::from("c")));
    }

    #[test]
    fn test_path_serializes_as_hop_list() {
        let path = Path::from_hops(vec![Hop::new(
            MovieId::from("m1"),
            PersonId::from("b"),
        )]);
        let json = serde_json::to_string(&path).unwrap();
        assert!(json.contains("\"m1\""));
        assert!(json.contains("\"b\""));
    }
}
