use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;
use futures_util::future::try_join_all;
use serde::{Deserialize, Serialize};

use crate::*;

/// Identifier of a category in the remote data source.
pub type CategoryId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueData {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub title: String,
    pub clues: Vec<ClueData>,
}

/// Where categories and their candidate clues come from.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    type Error: Display;

    async fn list_category_ids(&self) -> core::result::Result<Vec<CategoryId>, Self::Error>;

    async fn category_detail(
        &self,
        id: CategoryId,
    ) -> core::result::Result<CategoryData, Self::Error>;
}

fn data_source_error<E: Display>(err: E) -> GameError {
    log::warn!("data source failed: {}", err);
    GameError::DataSource(err.to_string())
}

/// Builds a fresh [`Board`] from a [`DataSource`].
///
/// The board is assembled locally and only handed out once every category
/// was fetched and sampled, so a failed build never leaves a partial board
/// behind.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: BoardConfig,
    sampler: Sampler,
}

impl BoardBuilder {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            sampler: Sampler::new(seed),
        }
    }

    pub async fn build<S: DataSource>(mut self, source: &S) -> Result<Board> {
        let ids = source
            .list_category_ids()
            .await
            .map_err(data_source_error)?;
        let ids = dedup_ids(ids);
        log::debug!("category pool has {} ids", ids.len());

        let chosen = self.sampler.sample_owned(ids, self.config.categories)?;
        log::debug!("chosen categories: {:?}", chosen);

        // fetch concurrently, results keep the order of `chosen`
        let details = try_join_all(chosen.iter().map(|&id| source.category_detail(id)))
            .await
            .map_err(data_source_error)?;

        let categories = chosen
            .into_iter()
            .zip(details)
            .map(|(id, detail)| self.assemble_category(id, detail))
            .collect::<Result<Vec<_>>>()?;

        Ok(Board::new(categories))
    }

    fn assemble_category(&mut self, id: CategoryId, detail: CategoryData) -> Result<Category> {
        let CategoryData { title, clues } = detail;
        let clues = self
            .sampler
            .sample_owned(clues, self.config.clues_per_category)
            .inspect_err(|err| log::warn!("category {} ({:?}): {}", id, title, err))?
            .into_iter()
            .map(|clue| Clue::new(clue.question, clue.answer))
            .collect();
        Ok(Category::new(title, clues))
    }
}

/// Drops repeated ids, keeping the first occurrence.
fn dedup_ids(ids: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut seen = BTreeSet::new();
    let total = ids.len();
    let ids: Vec<_> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
    if ids.len() != total {
        log::debug!("dropped {} duplicate category ids", total - ids.len());
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::vec;
    use core::cell::Cell;
    use futures_executor::block_on;

    /// In-memory source with `"Cat-<id>"` titles and `clues` clues per category.
    struct FakeSource {
        categories: BTreeMap<CategoryId, CategoryData>,
        fail_details: bool,
        detail_calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(ids: impl IntoIterator<Item = CategoryId>, clues: usize) -> Self {
            let categories = ids
                .into_iter()
                .map(|id| {
                    let clues = (0..clues)
                        .map(|i| ClueData {
                            question: format!("Q{}-{}", id, i),
                            answer: format!("A{}-{}", id, i),
                        })
                        .collect();
                    let title = format!("Cat-{}", id);
                    (id, CategoryData { title, clues })
                })
                .collect();
            Self {
                categories,
                fail_details: false,
                detail_calls: Cell::new(0),
            }
        }
    }

    impl DataSource for FakeSource {
        type Error = String;

        async fn list_category_ids(&self) -> core::result::Result<Vec<CategoryId>, String> {
            Ok(self.categories.keys().copied().collect())
        }

        async fn category_detail(
            &self,
            id: CategoryId,
        ) -> core::result::Result<CategoryData, String> {
            self.detail_calls.set(self.detail_calls.get() + 1);
            if self.fail_details {
                return Err(format!("category {} unreachable", id));
            }
            self.categories
                .get(&id)
                .cloned()
                .ok_or_else(|| format!("no category {}", id))
        }
    }

    struct UnreachableSource;

    impl DataSource for UnreachableSource {
        type Error = &'static str;

        async fn list_category_ids(&self) -> core::result::Result<Vec<CategoryId>, Self::Error> {
            Err("network down")
        }

        async fn category_detail(
            &self,
            _id: CategoryId,
        ) -> core::result::Result<CategoryData, Self::Error> {
            Err("network down")
        }
    }

    #[test]
    fn builds_six_by_five_board_from_eight_categories() {
        let source = FakeSource::new(1..=8, 7);

        let board = block_on(BoardBuilder::new(BoardConfig::default(), 99).build(&source)).unwrap();

        assert_eq!(board.category_count(), 6);
        let titles: BTreeSet<_> = board.categories().iter().map(Category::title).collect();
        assert_eq!(titles.len(), 6);

        for category in board.categories() {
            let id: CategoryId = category.title()["Cat-".len()..].parse().unwrap();
            assert!((1..=8).contains(&id));
            assert_eq!(category.clue_count(), 5);

            let questions: BTreeSet<_> = category.clues().iter().map(Clue::question).collect();
            assert_eq!(questions.len(), 5);
            for clue in category.clues() {
                assert!(clue.question().starts_with(&format!("Q{}-", id)));
                assert_eq!(clue.showing(), ClueState::Hidden);
            }
        }
    }

    #[test]
    fn too_few_categories_fails_the_build() {
        let source = FakeSource::new(1..=4, 7);

        let result = block_on(BoardBuilder::new(BoardConfig::default(), 1).build(&source));

        assert_eq!(
            result,
            Err(GameError::InsufficientItems {
                requested: 6,
                available: 4
            })
        );
        assert_eq!(source.detail_calls.get(), 0);
    }

    #[test]
    fn too_few_clues_in_any_category_fails_the_build() {
        let source = FakeSource::new(1..=6, 3);

        let result = block_on(BoardBuilder::new(BoardConfig::default(), 1).build(&source));

        assert_eq!(
            result,
            Err(GameError::InsufficientItems {
                requested: 5,
                available: 3
            })
        );
    }

    #[test]
    fn data_source_errors_abort_the_build() {
        let result = block_on(BoardBuilder::new(BoardConfig::default(), 1).build(&UnreachableSource));
        assert_eq!(result, Err(GameError::DataSource("network down".into())));

        let mut source = FakeSource::new(1..=8, 7);
        source.fail_details = true;
        let result = block_on(BoardBuilder::new(BoardConfig::default(), 1).build(&source));
        assert!(matches!(result, Err(GameError::DataSource(_))));
    }

    #[test]
    fn duplicate_ids_are_not_picked_twice() {
        let source = FakeSource::new([5, 6], 2);
        let ids = vec![5, 5, 6, 5];

        assert_eq!(dedup_ids(ids), vec![5, 6]);

        let config = BoardConfig::new(2, 2);
        let board = block_on(BoardBuilder::new(config, 8).build(&source)).unwrap();
        let mut titles: Vec<_> = board.categories().iter().map(Category::title).collect();
        titles.sort();
        assert_eq!(titles, vec!["Cat-5", "Cat-6"]);
    }

    #[test]
    fn same_seed_builds_same_board() {
        let source = FakeSource::new(1..=20, 10);

        let first = block_on(BoardBuilder::new(BoardConfig::default(), 5).build(&source)).unwrap();
        let second = block_on(BoardBuilder::new(BoardConfig::default(), 5).build(&source)).unwrap();

        assert_eq!(first, second);
    }
}
