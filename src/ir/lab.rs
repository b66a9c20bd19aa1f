//! Flat label-file model (HTK-style `.lab`).

use serde::{Deserialize, Serialize};

use crate::error::LabgridError;

/// Precision used when a lab file's times carry no decimal point.
pub const DEFAULT_LAB_PRECISION: u8 = 7;

/// One `start end label` line of a lab file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Start time in seconds.
    pub start: f64,

    /// End time in seconds.
    pub end: f64,

    /// Label text (may contain single spaces).
    pub label: String,
}

impl Annotation {
    pub fn new(start: f64, end: f64, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Returns `end - start`.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A lab file: a name, an output precision, and its annotations in file order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Name used when writing into a directory (`<name>.lab`).
    pub name: String,

    /// Number of decimal digits written for each time.
    pub precision: u8,

    /// Annotations, not required to be sorted or contiguous.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Default for Lab {
    fn default() -> Self {
        Self {
            name: String::new(),
            precision: DEFAULT_LAB_PRECISION,
            annotations: Vec::new(),
        }
    }
}

impl Lab {
    /// Creates an empty lab with the given name and precision.
    pub fn new(name: impl Into<String>, precision: u8) -> Self {
        Self {
            name: name.into(),
            precision,
            annotations: Vec::new(),
        }
    }

    /// Returns last annotation end minus first annotation start.
    ///
    /// This is the span covered by the file, not the sum of annotation
    /// durations, and it trusts the file order. `None` for an empty lab.
    pub fn duration(&self) -> Option<f64> {
        let first = self.annotations.first()?;
        let last = self.annotations.last()?;
        Some(last.end - first.start)
    }

    pub fn push_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn append_annotations(&mut self, annotations: impl IntoIterator<Item = Annotation>) {
        self.annotations.extend(annotations);
    }

    /// Inserts an annotation at `index`, shifting later ones right.
    pub fn insert_annotation(
        &mut self,
        index: usize,
        annotation: Annotation,
    ) -> Result<(), LabgridError> {
        let len = self.annotations.len();
        if index > len {
            return Err(LabgridError::IndexOutOfRange { index, len });
        }
        self.annotations.insert(index, annotation);
        Ok(())
    }

    /// Removes and returns the annotation at `index`, if any.
    pub fn remove_annotation(&mut self, index: usize) -> Option<Annotation> {
        if index < self.annotations.len() {
            Some(self.annotations.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lab() -> Lab {
        let mut lab = Lab::new("sample", 3);
        lab.append_annotations(vec![
            Annotation::new(0.5, 1.0, "a"),
            Annotation::new(1.0, 2.0, "b"),
            Annotation::new(3.0, 4.25, "c"),
        ]);
        lab
    }

    #[test]
    fn duration_spans_first_start_to_last_end() {
        let lab = sample_lab();
        assert_eq!(lab.duration(), Some(3.75));
        assert_eq!(lab.annotations[2].duration(), 1.25);
        assert_eq!(Lab::default().duration(), None);
    }

    #[test]
    fn insert_and_remove_annotations() {
        let mut lab = sample_lab();
        lab.insert_annotation(1, Annotation::new(1.0, 1.0, "mid"))
            .expect("insert in range");
        assert_eq!(lab.annotations[1].label, "mid");
        assert_eq!(lab.annotations.len(), 4);

        let err = lab
            .insert_annotation(10, Annotation::new(0.0, 0.0, "x"))
            .unwrap_err();
        assert!(matches!(err, LabgridError::IndexOutOfRange { index: 10, len: 4 }));

        let removed = lab.remove_annotation(1).expect("remove");
        assert_eq!(removed.label, "mid");
        assert!(lab.remove_annotation(3).is_none());
    }

    #[test]
    fn push_annotation_appends() {
        let mut lab = Lab::default();
        lab.push_annotation(Annotation::new(0.0, 1.0, "only"));
        assert_eq!(lab.precision, DEFAULT_LAB_PRECISION);
        assert_eq!(lab.annotations.len(), 1);
    }
}
