use std::cmp::Ordering;

use crate::entity::{Club, Player};
use crate::fields::{ClubField, PlayerField, StatField};

/// An entity that can be ordered by one of its stat fields. Ties are broken
/// by name and then by id, so equal inputs always give equal outputs.
pub trait Ranked {
    type Field: StatField;

    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn stat(&self, field: Self::Field) -> i32;
}

impl Ranked for Player {
    type Field = PlayerField;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self, field: PlayerField) -> i32 {
        self.stats.get(field)
    }
}

impl Ranked for Club {
    type Field = ClubField;

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self, field: ClubField) -> i32 {
        self.stats.get(field)
    }
}

pub fn by_identity<E: Ranked>(a: &E, b: &E) -> Ordering {
    a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id()))
}

pub fn by_stat_desc<E: Ranked>(field: E::Field) -> impl Fn(&E, &E) -> Ordering {
    move |a: &E, b: &E| {
        b.stat(field)
            .cmp(&a.stat(field))
            .then_with(|| by_identity(a, b))
    }
}

pub fn by_stat_asc<E: Ranked>(field: E::Field) -> impl Fn(&E, &E) -> Ordering {
    move |a: &E, b: &E| {
        a.stat(field)
            .cmp(&b.stat(field))
            .then_with(|| by_identity(a, b))
    }
}

/// The `limit` entities with the highest value of `field`. A non-positive
/// limit gives an empty result.
pub fn top_n<'a, E: Ranked>(entities: &'a [E], field: E::Field, limit: i64) -> Vec<&'a E> {
    if limit <= 0 {
        return Vec::new();
    }
    let mut ranked = entities.iter().collect::<Vec<_>>();
    let cmp = by_stat_desc::<E>(field);
    ranked.sort_by(|a, b| cmp(*a, *b));
    ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    ranked
}
