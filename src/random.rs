use crate::{
    Color, Coordinate, Hand, PlayerId, Shape, Tile, TileBag, COORDINATE_LIMIT, HAND_LEN,
};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// It inserts a random, small, non-zero number of [tiles](Tile) into the back of the bag.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the bag.
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R, bag: &mut TileBag) -> usize {
    let bag_len = rng.gen_range(10..20);
    for _ in 0..bag_len {
        bag.return_tile(rng.gen());
    }

    bag_len
}

/// Adds a random, small, non-zero number of [tiles](Tile) no greater than [HAND_LEN] to
/// the hand.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the hand.
pub fn random_hand<R: Rng + ?Sized>(rng: &mut R, hand: &mut Hand) -> usize {
    let hand_len = rng.gen_range(2..=HAND_LEN);
    for _ in 0..hand_len {
        hand.add_tile(rng.gen());
    }

    hand_len
}

/// A random, medium, non-zero score.
pub fn random_score<R: Rng + ?Sized>(rng: &mut R) -> usize {
    Uniform::from(100..200).sample(rng)
}

/// Either player.
pub fn random_current_player<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
    *PlayerId::PLAYERS
        .choose(rng)
        .expect("PLAYERS should not be empty")
}

/// A new [tile](Tile) with a random, different [shape](Shape) but the same [color](Color).
pub fn random_different_shape_same_color<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Shape::SHAPES_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the shape at its own index in the array shapes
    let random_different_index =
        random_index + if random_index < tile.shape as usize { 0 } else { 1 };
    Tile::new(tile.color, Shape::shapes()[random_different_index])
}

/// A new [tile](Tile) with a random, different [color](Color) but the same [shape](Shape).
pub fn random_different_color_same_shape<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the color at its own index in the array colors
    let random_different_index =
        random_index + if random_index < tile.color as usize { 0 } else { 1 };
    Tile::new(Color::colors()[random_different_index], tile.shape)
}

/// A new [tile](Tile) which shares neither [color](Color) nor [shape](Shape) with `tile`.
pub fn random_different_color_different_shape<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let color = random_different_color_same_shape(rng, tile).color;
    let shape = random_different_shape_same_color(rng, tile).shape;
    Tile::new(color, shape)
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where the values of both components lie
/// inside the range -[COORDINATE_LIMIT] exclusive to [COORDINATE_LIMIT] exclusive.
pub fn random_legal_coordinates<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Coordinate> {
    let possible_legal_coordinates = Uniform::from(0..COORDINATE_LIMIT);
    [
        (
            -possible_legal_coordinates.sample(rng),
            -possible_legal_coordinates.sample(rng),
        ),
        (
            -possible_legal_coordinates.sample(rng),
            possible_legal_coordinates.sample(rng),
        ),
        (
            possible_legal_coordinates.sample(rng),
            -possible_legal_coordinates.sample(rng),
        ),
        (
            possible_legal_coordinates.sample(rng),
            possible_legal_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where the value of some component lies
/// outside the range -[COORDINATE_LIMIT] exclusive to [COORDINATE_LIMIT] exclusive.
pub fn random_illegal_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
) -> impl Iterator<Item = Coordinate> {
    let possible_coordinates = Uniform::from(0..isize::MAX);
    let possible_illegal_coordinates = Uniform::from(COORDINATE_LIMIT..isize::MAX);
    [
        (
            -possible_coordinates.sample(rng),
            -possible_illegal_coordinates.sample(rng),
        ),
        (
            -possible_illegal_coordinates.sample(rng),
            possible_coordinates.sample(rng),
        ),
        (
            possible_illegal_coordinates.sample(rng),
            -possible_coordinates.sample(rng),
        ),
        (
            possible_coordinates.sample(rng),
            possible_illegal_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_within_limit;

    #[test]
    fn random_bag_empty() {
        let mut bag = TileBag::new();

        let bag_len = random_bag(&mut rand::thread_rng(), &mut bag);

        assert_eq!(bag.len(), bag_len);
    }

    #[test]
    fn random_hand_empty() {
        let mut hand = Hand::new();

        let hand_len = random_hand(&mut rand::thread_rng(), &mut hand);

        assert_eq!(hand.len(), hand_len);
        assert!(hand_len <= HAND_LEN);
    }

    #[test]
    fn random_score_non_zero() {
        assert!(random_score(&mut rand::thread_rng()) > 0);
    }

    #[test]
    fn random_different_shape_same_color_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_shape_same_color(&mut rng, tile);

        assert_eq!(tile.color, other.color);
        assert_ne!(tile.shape, other.shape);
    }

    #[test]
    fn random_different_color_same_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_color_same_shape(&mut rng, tile);

        assert_ne!(tile.color, other.color);
        assert_eq!(tile.shape, other.shape);
    }

    #[test]
    fn random_different_color_different_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_color_different_shape(&mut rng, tile);

        assert!(!tile.has_same_color(&other));
        assert!(!tile.has_same_shape(&other));
    }

    #[test]
    fn random_legal_coordinates_all_legal() {
        for coordinate in random_legal_coordinates(&mut rand::thread_rng()) {
            assert!(is_within_limit(coordinate));
        }
    }

    #[test]
    fn random_illegal_coordinates_all_illegal() {
        for coordinate in random_illegal_coordinates(&mut rand::thread_rng()) {
            assert!(!is_within_limit(coordinate));
        }
    }
}
