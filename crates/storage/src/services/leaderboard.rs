use crate::models::{ContributorRecord, RankedEntry};

/// Points awarded for every annotation written.
pub const ANNOTATION_WEIGHT: u64 = 5;
/// Points awarded for every annotation evaluated.
pub const EVALUATION_WEIGHT: u64 = 1;

pub fn score(annotation_count: u32, evaluation_count: u32) -> u64 {
    ANNOTATION_WEIGHT * u64::from(annotation_count) + EVALUATION_WEIGHT * u64::from(evaluation_count)
}

/// Scores every contributor and orders them by score, highest first.
///
/// The sort is stable: contributors with the same score keep the order in
/// which the counts query returned them. Ranks follow the sorted position
/// starting at 1, so tied contributors still get distinct ranks.
pub fn compute_ranking(records: Vec<ContributorRecord>) -> Vec<RankedEntry> {
    let mut scored: Vec<(u64, ContributorRecord)> = records
        .into_iter()
        .map(|record| (score(record.annotation_count, record.evaluation_count), record))
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (score, record))| RankedEntry {
            rank: index + 1,
            nickname: record.nickname,
            annotation_count: record.annotation_count,
            evaluation_count: record.evaluation_count,
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_score_weights() {
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(1, 0), 5);
        assert_eq!(score(0, 1), 1);
        assert_eq!(score(2, 3), 13);
    }

    #[test]
    fn test_score_does_not_overflow() {
        assert_eq!(score(u32::MAX, u32::MAX), 6 * u64::from(u32::MAX));
    }

    #[test]
    fn test_compute_ranking_example() {
        let records = vec![
            ContributorRecord::new(Some("alice"), 2, 3),
            ContributorRecord::new(None, 0, 10),
            ContributorRecord::new(Some("bob"), 2, 3),
        ];

        let ranking = compute_ranking(records);

        let summary: Vec<(usize, &str, u64)> = ranking
            .iter()
            .map(|entry| (entry.rank, entry.display_nickname(), entry.score))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, "alice", 13),
                (2, "bob", 13),
                (3, "Anonymous user", 10),
            ]
        );
    }

    #[test]
    fn test_compute_ranking_keeps_counts() {
        let ranking = compute_ranking(vec![ContributorRecord::new(Some("carol"), 4, 7)]);

        assert_eq!(
            ranking,
            vec![RankedEntry {
                rank: 1,
                nickname: Some("carol".to_string()),
                annotation_count: 4,
                evaluation_count: 7,
                score: 27,
            }]
        );
    }

    #[test]
    fn test_compute_ranking_empty() {
        assert!(compute_ranking(Vec::new()).is_empty());
    }

    #[test]
    fn test_annotations_outweigh_evaluations() {
        let ranking = compute_ranking(vec![
            ContributorRecord::new(Some("reviewer"), 0, 4),
            ContributorRecord::new(Some("writer"), 1, 0),
        ]);

        assert_eq!(ranking[0].display_nickname(), "writer");
        assert_eq!(ranking[1].display_nickname(), "reviewer");
    }

    fn arb_record() -> impl Strategy<Value = ContributorRecord> {
        (
            proptest::option::of("[a-z]{1,8}"),
            0u32..1_000,
            0u32..5_000,
        )
            .prop_map(|(nickname, annotation_count, evaluation_count)| ContributorRecord {
                nickname,
                annotation_count,
                evaluation_count,
            })
    }

    proptest! {
        /// Property: score is always 5 per annotation plus 1 per evaluation.
        #[test]
        fn score_is_weighted_sum(annotations in any::<u32>(), evaluations in any::<u32>()) {
            prop_assert_eq!(
                score(annotations, evaluations),
                5 * u64::from(annotations) + u64::from(evaluations)
            );
        }

        /// Property: ranks run 1..=n with no gaps, whatever the ties.
        #[test]
        fn ranks_are_sequential(records in proptest::collection::vec(arb_record(), 0..50)) {
            let ranking = compute_ranking(records.clone());

            prop_assert_eq!(ranking.len(), records.len());
            for (index, entry) in ranking.iter().enumerate() {
                prop_assert_eq!(entry.rank, index + 1);
            }
        }

        /// Property: scores never increase down the table.
        #[test]
        fn scores_are_descending(records in proptest::collection::vec(arb_record(), 0..50)) {
            let ranking = compute_ranking(records);

            for pair in ranking.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        /// Property: equal scores keep their input order.
        ///
        /// Counts are kept tiny so ties are frequent, and every record is
        /// tagged with its input position through the nickname.
        #[test]
        fn ties_keep_input_order(counts in proptest::collection::vec((0u32..3, 0u32..6), 0..40)) {
            let records: Vec<ContributorRecord> = counts
                .iter()
                .enumerate()
                .map(|(index, &(annotations, evaluations))| ContributorRecord {
                    nickname: Some(index.to_string()),
                    annotation_count: annotations,
                    evaluation_count: evaluations,
                })
                .collect();

            let ranking = compute_ranking(records);

            for pair in ranking.windows(2) {
                if pair[0].score == pair[1].score {
                    let first: usize = pair[0].display_nickname().parse().unwrap();
                    let second: usize = pair[1].display_nickname().parse().unwrap();
                    prop_assert!(first < second);
                }
            }
        }

        /// Property: a missing nickname never moves a contributor.
        #[test]
        fn anonymity_does_not_change_ranking(records in proptest::collection::vec(arb_record(), 0..30)) {
            let named: Vec<ContributorRecord> = records
                .iter()
                .cloned()
                .map(|record| ContributorRecord {
                    nickname: Some(record.nickname.unwrap_or_else(|| "someone".to_string())),
                    ..record
                })
                .collect();

            let with_anonymous = compute_ranking(records);
            let all_named = compute_ranking(named);

            for (anonymous, named) in with_anonymous.iter().zip(&all_named) {
                prop_assert_eq!(anonymous.rank, named.rank);
                prop_assert_eq!(anonymous.score, named.score);
                prop_assert_eq!(anonymous.annotation_count, named.annotation_count);
                prop_assert_eq!(anonymous.evaluation_count, named.evaluation_count);
            }
        }
    }
}
