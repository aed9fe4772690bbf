use crate::Tile;
use itertools::Itertools;
use std::fmt;
use std::iter::FusedIterator;

/// An ordered sequence of [tiles](Tile) with constant time insertion and removal at either end.
///
/// Nodes live in an arena and link to each other through indexes into it. Removed nodes leave
/// a vacant slot behind which is reused by the next insertion, so a list which only moves
/// [tiles](Tile) around (like a bag or a hand) stops allocating once it has reached its
/// largest size.
///
/// Used for the bag, for each hand, and for the lines collected around a placement.
#[derive(Clone, Default)]
pub struct TileList {
    /// Every node ever allocated, linked or vacant.
    slots: Vec<Slot>,
    /// The first linked node or [None] exactly when `len` is `0`.
    head: Option<usize>,
    /// The last linked node or [None] exactly when `len` is `0`.
    tail: Option<usize>,
    /// The most recently vacated slot, which links to the one vacated before it.
    vacant: Option<usize>,
    /// The number of linked nodes.
    len: usize,
}

#[derive(Debug, Clone)]
struct Node {
    tile: Tile,
    previous: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot {
    Linked(Node),
    Vacant { next_vacant: Option<usize> },
}

/// Describes the reason why an operation on a [TileList] could not be executed.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TileListError {
    /// Attempting to access a position at or after the end of the list.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of [tiles](Tile) in the list.
        len: usize,
    },
    /// Attempting to remove from an empty list.
    EmptyList,
}

impl fmt::Display for TileListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileListError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a list of {len} tiles")
            }
            TileListError::EmptyList => write!(f, "the list is empty"),
        }
    }
}

impl std::error::Error for TileListError {}

impl TileList {
    /// An empty list.
    pub fn new() -> TileList {
        TileList::default()
    }

    /// An empty list which holds `capacity` [tiles](Tile) before reallocating.
    pub fn with_capacity(capacity: usize) -> TileList {
        TileList {
            slots: Vec::with_capacity(capacity),
            ..TileList::default()
        }
    }

    /// The number of [tiles](Tile) in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first [tile](Tile) or [None] if empty.
    pub fn front(&self) -> Option<&Tile> {
        self.head.map(|handle| &self.node(handle).tile)
    }

    /// The last [tile](Tile) or [None] if empty.
    pub fn back(&self) -> Option<&Tile> {
        self.tail.map(|handle| &self.node(handle).tile)
    }

    /// Inserts `tile` before the first [tile](Tile).
    pub fn add_front(&mut self, tile: Tile) {
        let handle = self.allocate(Node {
            tile,
            previous: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).previous = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
    }

    /// Inserts `tile` after the last [tile](Tile).
    pub fn add_back(&mut self, tile: Tile) {
        let handle = self.allocate(Node {
            tile,
            previous: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
    }

    /// Removes and returns the first [tile](Tile).
    ///
    /// # Errors
    ///
    /// * [TileListError::EmptyList] when there is no [tile](Tile) to remove.
    pub fn remove_front(&mut self) -> Result<Tile, TileListError> {
        let head = self.head.ok_or(TileListError::EmptyList)?;
        Ok(self.unlink(head))
    }

    /// Removes and returns the last [tile](Tile).
    ///
    /// # Errors
    ///
    /// * [TileListError::EmptyList] when there is no [tile](Tile) to remove.
    pub fn remove_back(&mut self) -> Result<Tile, TileListError> {
        let tail = self.tail.ok_or(TileListError::EmptyList)?;
        Ok(self.unlink(tail))
    }

    /// The [tile](Tile) at `index`, walking from whichever end is closer.
    ///
    /// # Errors
    ///
    /// * [TileListError::IndexOutOfRange] when `index` is greater than or equal to the length.
    pub fn at(&self, index: usize) -> Result<&Tile, TileListError> {
        let handle = self.handle_at(index)?;
        Ok(&self.node(handle).tile)
    }

    /// When `replace` is true, overwrites the [tile](Tile) at `index` with `tile` and returns
    /// the overwritten [tile](Tile). Otherwise, inserts `tile` before the [tile](Tile)
    /// at `index` and returns [None]. Appending is not possible through this method since
    /// `index` has to name an existing [tile](Tile).
    ///
    /// # Errors
    ///
    /// * [TileListError::IndexOutOfRange] when `index` is greater than or equal to the length.
    pub fn insert(
        &mut self,
        tile: Tile,
        index: usize,
        replace: bool,
    ) -> Result<Option<Tile>, TileListError> {
        let handle = self.handle_at(index)?;

        if replace {
            let replaced = std::mem::replace(&mut self.node_mut(handle).tile, tile);
            return Ok(Some(replaced));
        }

        let previous = self.node(handle).previous;
        let inserted = self.allocate(Node {
            tile,
            previous,
            next: Some(handle),
        });
        self.node_mut(handle).previous = Some(inserted);
        match previous {
            Some(previous) => self.node_mut(previous).next = Some(inserted),
            None => self.head = Some(inserted),
        }
        self.len += 1;
        Ok(None)
    }

    /// Removes every [tile](Tile) equal to `tile`.
    ///
    /// # Returns
    ///
    /// The number of removed [tiles](Tile).
    pub fn remove(&mut self, tile: &Tile) -> usize {
        let matches = self
            .handles()
            .filter(|&handle| self.node(handle).tile == *tile)
            .collect_vec();
        for &handle in &matches {
            self.unlink(handle);
        }
        matches.len()
    }

    /// Removes and returns exactly one [tile](Tile) at `index`.
    ///
    /// # Errors
    ///
    /// * [TileListError::IndexOutOfRange] when `index` is greater than or equal to the length.
    pub fn remove_at(&mut self, index: usize) -> Result<Tile, TileListError> {
        let handle = self.handle_at(index)?;
        Ok(self.unlink(handle))
    }

    /// The index of the first [tile](Tile) equal to `tile` or [None] if absent.
    pub fn position(&self, tile: &Tile) -> Option<usize> {
        self.iter().position(|other| other == tile)
    }

    /// Whether some [tile](Tile) is equal to `tile`.
    pub fn contains(&self, tile: &Tile) -> bool {
        self.iter().any(|other| other == tile)
    }

    /// Removes every [tile](Tile) and forgets all slots.
    pub fn clear(&mut self) {
        *self = TileList::with_capacity(self.slots.capacity());
    }

    /// An [iterator](Iterator) over the [tiles](Tile) from front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Stores `node` in a vacant slot if one exists, otherwise in a new slot.
    fn allocate(&mut self, node: Node) -> usize {
        match self.vacant {
            Some(handle) => {
                self.vacant = match self.slots[handle] {
                    Slot::Vacant { next_vacant } => next_vacant,
                    Slot::Linked(_) => {
                        dbg!(handle);
                        unreachable!("vacant list should only link vacant slots.")
                    }
                };
                self.slots[handle] = Slot::Linked(node);
                handle
            }
            None => {
                self.slots.push(Slot::Linked(node));
                self.slots.len() - 1
            }
        }
    }

    /// Relinks the neighbors of `handle` around it, then vacates its slot.
    fn unlink(&mut self, handle: usize) -> Tile {
        let Node {
            previous, next, ..
        } = *self.node(handle);

        match previous {
            Some(previous) => self.node_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.node_mut(next).previous = previous,
            None => self.tail = previous,
        }

        let slot = std::mem::replace(
            &mut self.slots[handle],
            Slot::Vacant {
                next_vacant: self.vacant,
            },
        );
        self.vacant = Some(handle);
        self.len -= 1;

        match slot {
            Slot::Linked(node) => node.tile,
            Slot::Vacant { .. } => {
                dbg!(handle);
                unreachable!("handle should point to a linked slot.")
            }
        }
    }

    fn handle_at(&self, index: usize) -> Result<usize, TileListError> {
        if index >= self.len {
            return Err(TileListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }

        let handle = if index < self.len / 2 {
            self.handles().nth(index)
        } else {
            self.handles().rev().nth(self.len - 1 - index)
        };
        Ok(handle.unwrap_or_else(|| {
            dbg!(index, self.len);
            unreachable!("len should match the number of linked nodes.")
        }))
    }

    fn handles(&self) -> Handles<'_> {
        Handles {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn node(&self, handle: usize) -> &Node {
        match &self.slots[handle] {
            Slot::Linked(node) => node,
            Slot::Vacant { .. } => {
                dbg!(handle);
                unreachable!("handle should point to a linked slot.")
            }
        }
    }

    fn node_mut(&mut self, handle: usize) -> &mut Node {
        match &mut self.slots[handle] {
            Slot::Linked(node) => node,
            Slot::Vacant { .. } => {
                dbg!(handle);
                unreachable!("handle should point to a linked slot.")
            }
        }
    }
}

/// Walks handles of linked nodes from both ends until they meet.
struct Handles<'a> {
    list: &'a TileList,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl Iterator for Handles<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.list.node(handle).next;
        self.remaining -= 1;
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Handles<'_> {
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.list.node(handle).previous;
        self.remaining -= 1;
        Some(handle)
    }
}

/// An [iterator](Iterator) over the [tiles](Tile) of a [TileList]. Created from [TileList::iter].
#[derive(Debug)]
pub struct Iter<'a> {
    list: &'a TileList,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tile;

    fn next(&mut self) -> Option<&'a Tile> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Tile> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.tile)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TileList {
    type Item = &'a Tile;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<Tile> for TileList {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> TileList {
        let iter = iter.into_iter();
        let mut list = TileList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl Extend<Tile> for TileList {
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        for tile in iter {
            self.add_back(tile);
        }
    }
}

/// Lists are equal when they hold equal [tiles](Tile) in the same order, regardless of
/// how their slots are laid out.
impl PartialEq for TileList {
    fn eq(&self, other: &TileList) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for TileList {}

impl fmt::Debug for TileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for TileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Shape};
    use rand::Rng;

    fn red(shape: Shape) -> Tile {
        Tile::new(Color::Red, shape)
    }

    fn assert_links(list: &TileList) {
        assert_eq!(list.len, list.iter().count());
        assert_eq!(list.len, list.iter().rev().count());
        assert_eq!(list.len == 0, list.head.is_none());
        assert_eq!(list.len == 0, list.tail.is_none());
        let forward: Vec<Tile> = list.iter().copied().collect();
        let mut backward: Vec<Tile> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty() {
        let list = TileList::new();

        assert!(list.is_empty());
        assert_eq!(None, list.front());
        assert_eq!(None, list.back());
        assert_links(&list);
    }

    #[test]
    fn add_front_and_back() {
        let mut list = TileList::new();
        list.add_back(red(Shape::Diamond));
        list.add_front(red(Shape::Star4));
        list.add_back(red(Shape::Square));
        list.add_front(red(Shape::Circle));

        let expected: TileList = [Shape::Circle, Shape::Star4, Shape::Diamond, Shape::Square]
            .map(red)
            .into_iter()
            .collect();
        assert_eq!(expected, list);
        assert_eq!(Some(&red(Shape::Circle)), list.front());
        assert_eq!(Some(&red(Shape::Square)), list.back());
        assert_links(&list);
    }

    #[test]
    fn remove_front_and_back() {
        let mut list: TileList = [Shape::Circle, Shape::Star4, Shape::Diamond]
            .map(red)
            .into_iter()
            .collect();

        assert_eq!(Ok(red(Shape::Circle)), list.remove_front());
        assert_eq!(Ok(red(Shape::Diamond)), list.remove_back());
        assert_eq!(Ok(red(Shape::Star4)), list.remove_back());
        assert_links(&list);
        assert_eq!(Err(TileListError::EmptyList), list.remove_front());
        assert_eq!(Err(TileListError::EmptyList), list.remove_back());
        assert_eq!(0, list.len());
    }

    #[test]
    fn at() {
        let shapes = Shape::shapes();
        let list: TileList = shapes.map(red).into_iter().collect();

        for (index, &shape) in shapes.iter().enumerate() {
            assert_eq!(Ok(&red(shape)), list.at(index));
        }
        assert_eq!(
            Err(TileListError::IndexOutOfRange {
                index: shapes.len(),
                len: shapes.len()
            }),
            list.at(shapes.len())
        );
    }

    #[test]
    fn insert_before() {
        let mut list: TileList = [Shape::Circle, Shape::Square].map(red).into_iter().collect();

        assert_eq!(Ok(None), list.insert(red(Shape::Diamond), 1, false));
        assert_eq!(Ok(None), list.insert(red(Shape::Clover), 0, false));

        let expected: TileList = [Shape::Clover, Shape::Circle, Shape::Diamond, Shape::Square]
            .map(red)
            .into_iter()
            .collect();
        assert_eq!(expected, list);
        assert_links(&list);
    }

    #[test]
    fn insert_before_last() {
        let mut list: TileList = [Shape::Circle, Shape::Square].map(red).into_iter().collect();

        assert_eq!(Ok(None), list.insert(red(Shape::Star6), 1, false));

        assert_eq!(Some(&red(Shape::Square)), list.back());
        assert_eq!(Ok(&red(Shape::Star6)), list.at(1));
        assert_links(&list);
    }

    #[test]
    fn insert_replace() {
        let mut list: TileList = [Shape::Circle, Shape::Star4, Shape::Square]
            .map(red)
            .into_iter()
            .collect();

        assert_eq!(
            Ok(Some(red(Shape::Circle))),
            list.insert(red(Shape::Clover), 0, true)
        );
        assert_eq!(
            Ok(Some(red(Shape::Star4))),
            list.insert(red(Shape::Diamond), 1, true)
        );
        assert_eq!(
            Ok(Some(red(Shape::Square))),
            list.insert(red(Shape::Star6), 2, true)
        );

        let expected: TileList = [Shape::Clover, Shape::Diamond, Shape::Star6]
            .map(red)
            .into_iter()
            .collect();
        assert_eq!(expected, list);
        assert_links(&list);
    }

    #[test]
    fn insert_at_len_out_of_range() {
        let mut list: TileList = [Shape::Circle].map(red).into_iter().collect();

        let expected_error = Err(TileListError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(expected_error, list.insert(red(Shape::Square), 1, false));
        assert_eq!(expected_error, list.insert(red(Shape::Square), 1, true));
        assert_eq!(
            Err(TileListError::IndexOutOfRange { index: 0, len: 0 }),
            TileList::new().insert(red(Shape::Square), 0, false)
        );
    }

    #[test]
    fn remove_all_matches() {
        let circle = red(Shape::Circle);
        let square = red(Shape::Square);
        let mut list: TileList = [circle, square, circle, circle, square, circle]
            .into_iter()
            .collect();

        assert_eq!(4, list.remove(&circle));
        assert_eq!(TileList::from_iter([square, square]), list);
        assert_eq!(0, list.remove(&circle));
        assert_links(&list);
    }

    #[test]
    fn remove_at_interior() {
        let mut list: TileList = [Shape::Circle, Shape::Star4, Shape::Diamond, Shape::Square]
            .map(red)
            .into_iter()
            .collect();

        assert_eq!(Ok(red(Shape::Diamond)), list.remove_at(2));
        assert_eq!(Ok(red(Shape::Star4)), list.remove_at(1));

        assert_eq!(
            TileList::from_iter([red(Shape::Circle), red(Shape::Square)]),
            list
        );
        assert_links(&list);
        assert_eq!(
            Err(TileListError::IndexOutOfRange { index: 2, len: 2 }),
            list.remove_at(2)
        );
    }

    #[test]
    fn vacant_slots_reused() {
        let mut list: TileList = Shape::shapes().map(red).into_iter().collect();
        let slots_len = list.slots.len();

        for _ in 0..3 {
            list.remove_front().unwrap();
            list.remove_at(1).unwrap();
            list.add_back(red(Shape::Circle));
            list.add_front(red(Shape::Clover));
        }

        assert_eq!(slots_len, list.slots.len());
        assert_eq!(Shape::SHAPES_LEN, list.len());
        assert_links(&list);
    }

    #[test]
    fn position_and_contains() {
        let list: TileList = [Shape::Circle, Shape::Square, Shape::Square]
            .map(red)
            .into_iter()
            .collect();

        assert_eq!(Some(1), list.position(&red(Shape::Square)));
        assert!(list.contains(&red(Shape::Circle)));
        assert!(!list.contains(&Tile::new(Color::Blue, Shape::Circle)));
        assert_eq!(None, list.position(&red(Shape::Clover)));
    }

    #[test]
    fn random_operations_keep_links() {
        let mut rng = rand::thread_rng();
        let mut list = TileList::new();
        let mut expected = Vec::new();

        for _ in 0..500 {
            let tile: Tile = rng.gen();
            match rng.gen_range(0..6) {
                0 => {
                    list.add_front(tile);
                    expected.insert(0, tile);
                }
                1 => {
                    list.add_back(tile);
                    expected.push(tile);
                }
                2 if !expected.is_empty() => {
                    let index = rng.gen_range(0..expected.len());
                    assert_eq!(Ok(expected.remove(index)), list.remove_at(index));
                }
                3 if !expected.is_empty() => {
                    let index = rng.gen_range(0..expected.len());
                    list.insert(tile, index, false).unwrap();
                    expected.insert(index, tile);
                }
                4 => {
                    let removed = list.remove(&tile);
                    let before = expected.len();
                    expected.retain(|other| *other != tile);
                    assert_eq!(before - expected.len(), removed);
                }
                _ => {
                    assert_eq!(expected.first().copied(), list.remove_front().ok());
                    if !expected.is_empty() {
                        expected.remove(0);
                    }
                }
            }
            assert_eq!(expected.len(), list.len());
        }

        assert!(list.iter().copied().eq(expected));
        assert_links(&list);
    }

    #[test]
    fn display() {
        let list: TileList = [
            Tile::new(Color::Red, Shape::Circle),
            Tile::new(Color::Orange, Shape::Star4),
        ]
        .into_iter()
        .collect();

        assert_eq!("R1, O2", list.to_string());
        assert_eq!("", TileList::new().to_string());
    }

    #[test]
    fn clear() {
        let mut list: TileList = Shape::shapes().map(red).into_iter().collect();

        list.clear();

        assert!(list.is_empty());
        assert_links(&list);
    }
}
