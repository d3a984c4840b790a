use serde::Serialize;

/// Photometric record for one connected component.
///
/// `object_id` is only unique within a file; `(file_index, object_id)` is the
/// catalog key. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectedObject {
    /// 1-based position of the source file in the run.
    pub file_index: usize,
    pub file_name: String,
    /// 1-based rank of the component within its file.
    pub object_id: usize,
    /// Mean column coordinate.
    pub x: f64,
    /// Mean row coordinate.
    pub y: f64,
    /// Pixel count.
    pub size: usize,
    /// Sum of pixel intensities.
    pub luminosity: f64,
}

/// Ordered collection of detections across a pipeline run.
///
/// Records are appended in file order, then object order, and never edited.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    objects: Vec<DetectedObject>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, objects: impl IntoIterator<Item = DetectedObject>) {
        self.objects.extend(objects);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[DetectedObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetectedObject> {
        self.objects.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = DetectedObject;
    type IntoIter = std::vec::IntoIter<DetectedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}
