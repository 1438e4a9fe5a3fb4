//! A minimal push-based pipeline: items are handed to a transform one at a
//! time, in order, and a single `flush` follows the last item.

use crate::{PipelineError, StreamItem};

/// A single-item transform with an end-of-input hook.
pub trait Transform {
    /// Processes one item. `Ok(None)` drops it from the output.
    fn transform(&mut self, item: StreamItem) -> Result<Option<StreamItem>, PipelineError>;

    /// Called once after the last item.
    fn flush(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn transform(&mut self, item: StreamItem) -> Result<Option<StreamItem>, PipelineError> {
        (**self).transform(item)
    }

    fn flush(&mut self) -> Result<(), PipelineError> {
        (**self).flush()
    }
}

/// Drives `items` through `transform`, handing every forwarded item to
/// `on_item` before the next one is processed. Stops at the first error;
/// `flush` only runs when every item went through.
pub fn run_with<T, I, F, E>(transform: &mut T, items: I, mut on_item: F) -> Result<(), E>
where
    T: Transform + ?Sized,
    I: IntoIterator<Item = StreamItem>,
    F: FnMut(StreamItem) -> Result<(), E>,
    E: From<PipelineError>,
{
    for item in items {
        if let Some(forwarded) = transform.transform(item)? {
            on_item(forwarded)?;
        }
    }
    transform.flush()?;
    Ok(())
}

/// Drives `items` through `transform` and collects what comes out.
pub fn run<T, I>(transform: &mut T, items: I) -> Result<Vec<StreamItem>, PipelineError>
where
    T: Transform + ?Sized,
    I: IntoIterator<Item = StreamItem>,
{
    let mut output = Vec::new();
    run_with(transform, items, |item| {
        output.push(item);
        Ok::<_, PipelineError>(())
    })?;
    Ok(output)
}
