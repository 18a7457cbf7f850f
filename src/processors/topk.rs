//! Top-k classification result processing.

use std::collections::HashMap;

/// Result structure for top-k classification processing.
///
/// Contains the top-k class indexes and their corresponding confidence scores
/// for each prediction in a batch.
#[derive(Debug, Clone)]
pub struct TopkResult {
    /// Top-k class indexes for each prediction, highest score first.
    pub indexes: Vec<Vec<usize>>,
    /// Top-k scores corresponding to the indexes.
    pub scores: Vec<Vec<f32>>,
    /// Class names for each prediction, if a mapping was provided.
    pub class_names: Option<Vec<Vec<String>>>,
}

/// A processor for extracting top-k results from classification outputs.
#[derive(Debug)]
pub struct Topk {
    /// Optional mapping from class IDs to class names.
    class_id_map: Option<HashMap<usize, String>>,
}

impl Topk {
    /// Creates a new Topk processor with optional class name mapping.
    pub fn new(class_id_map: Option<HashMap<usize, String>>) -> Self {
        Self { class_id_map }
    }

    /// Creates a new Topk processor without class name mapping.
    pub fn without_class_names() -> Self {
        Self::new(None)
    }

    /// Creates a new Topk processor with class names from a slice.
    ///
    /// The slice index corresponds to the class ID.
    pub fn from_class_names<S: AsRef<str>>(class_names: &[S]) -> Self {
        let class_id_map: HashMap<usize, String> = class_names
            .iter()
            .enumerate()
            .map(|(i, name)| (i, name.as_ref().to_string()))
            .collect();
        Self::new(Some(class_id_map))
    }

    /// Processes classification outputs to extract top-k results.
    ///
    /// # Arguments
    ///
    /// * `predictions` - per-prediction confidence scores over all classes.
    /// * `k` - Number of top predictions to extract (must be > 0).
    pub fn process(&self, predictions: &[Vec<f32>], k: usize) -> Result<TopkResult, String> {
        if k == 0 {
            return Err("k must be greater than 0".to_string());
        }

        if predictions.is_empty() {
            return Ok(TopkResult {
                indexes: vec![],
                scores: vec![],
                class_names: None,
            });
        }

        let mut all_indexes = Vec::new();
        let mut all_scores = Vec::new();
        let mut all_class_names = if self.class_id_map.is_some() {
            Some(Vec::new())
        } else {
            None
        };

        for prediction in predictions {
            if prediction.is_empty() {
                return Err("Empty prediction vector".to_string());
            }

            let effective_k = k.min(prediction.len());
            let (top_indexes, top_scores) =
                self.extract_topk_from_prediction(prediction, effective_k);

            all_indexes.push(top_indexes.clone());
            all_scores.push(top_scores);

            if let Some(ref mut class_names_vec) = all_class_names {
                let names = self.map_indexes_to_names(&top_indexes);
                class_names_vec.push(names);
            }
        }

        Ok(TopkResult {
            indexes: all_indexes,
            scores: all_scores,
            class_names: all_class_names,
        })
    }

    /// Processes a single prediction vector.
    pub fn process_single(&self, prediction: &[f32], k: usize) -> Result<TopkResult, String> {
        self.process(&[prediction.to_vec()], k)
    }

    fn extract_topk_from_prediction(&self, prediction: &[f32], k: usize) -> (Vec<usize>, Vec<f32>) {
        let mut indexed_scores: Vec<(usize, f32)> = prediction
            .iter()
            .enumerate()
            .map(|(idx, &score)| (idx, score))
            .collect();

        indexed_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let (indexes, scores): (Vec<usize>, Vec<f32>) =
            indexed_scores.into_iter().take(k).unzip();

        (indexes, scores)
    }

    /// Maps class indexes to class names using the internal mapping.
    ///
    /// Unknown indexes are rendered as `Unknown(idx)`.
    fn map_indexes_to_names(&self, indexes: &[usize]) -> Vec<String> {
        if let Some(ref class_map) = self.class_id_map {
            indexes
                .iter()
                .map(|&idx| {
                    class_map
                        .get(&idx)
                        .cloned()
                        .unwrap_or_else(|| format!("Unknown({idx})"))
                })
                .collect()
        } else {
            indexes.iter().map(|&idx| idx.to_string()).collect()
        }
    }

    /// Gets the class name for a given class ID.
    pub fn get_class_name(&self, class_id: usize) -> Option<&String> {
        self.class_id_map.as_ref()?.get(&class_id)
    }

    /// Gets the number of classes in the mapping.
    pub fn num_classes(&self) -> Option<usize> {
        self.class_id_map.as_ref().map(|map| map.len())
    }
}

impl Default for Topk {
    fn default() -> Self {
        Self::without_class_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topk_without_class_names() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8, 0.1], vec![0.7, 0.2, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes.len(), 2);
        assert_eq!(result.indexes[0], vec![1, 0]);
        assert_eq!(result.indexes[1], vec![0, 1]);
        assert!(result.class_names.is_none());
    }

    #[test]
    fn test_topk_with_class_names() {
        let topk = Topk::from_class_names(&["cat", "dog", "bird"]);
        let predictions = vec![vec![0.1, 0.8, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes[0], vec![1, 0]);
        assert_eq!(result.class_names.as_ref().unwrap()[0], vec!["dog", "cat"]);
    }

    #[test]
    fn test_argmax_is_first_entry() {
        let topk = Topk::from_class_names(&["a", "b", "c", "d"]);
        let result = topk.process_single(&[0.05, 0.2, 0.7, 0.05], 1).unwrap();
        assert_eq!(result.indexes[0], vec![2]);
        assert_eq!(result.class_names.as_ref().unwrap()[0], vec!["c"]);
    }

    #[test]
    fn test_topk_k_larger_than_classes() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8]];

        let result = topk.process(&predictions, 5).unwrap();
        assert_eq!(result.indexes[0].len(), 2);
    }

    #[test]
    fn test_topk_invalid_k() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8, 0.1]];

        assert!(topk.process(&predictions, 0).is_err());
    }

    #[test]
    fn test_unknown_index_is_labeled() {
        let topk = Topk::from_class_names(&["only"]);
        let names = topk.map_indexes_to_names(&[0, 7]);
        assert_eq!(names, vec!["only".to_string(), "Unknown(7)".to_string()]);
    }
}
