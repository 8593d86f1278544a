// ABOUTME: Maps raw engine output onto classified lifecycle errors.
// ABOUTME: Fragment matching is confined here; lifecycle logic never reads output text.

use super::error::EngineError;
use super::invoker::InvokeOutcome;

// Stable fragments of the Docker CLI's failure messages. The engine wraps
// them in daemon prefixes and container identifiers, so matching is on
// substrings rather than whole lines. Tied to the English wording of one
// engine family; targeting another engine or locale means revisiting these.
const NOT_RUNNING: &str = "is not running";
const NAME_IN_USE: &str = "is already in use";
const NOT_EXIST: &str = "No such container";

/// Classify the outcome of one engine invocation.
///
/// A successful invocation classifies as `Ok(())` regardless of output
/// content. Failures are matched against the known message fragments in a
/// fixed order, first match wins; anything unrecognized degrades to
/// [`EngineError::Runtime`] with the raw output preserved.
pub fn classify(outcome: InvokeOutcome) -> Result<(), EngineError> {
    let Some(reason) = outcome.failure else {
        return Ok(());
    };

    let output = outcome.output;
    if output.contains(NOT_RUNNING) {
        Err(EngineError::NotRunning { output })
    } else if output.contains(NAME_IN_USE) {
        Err(EngineError::NameInUse { output })
    } else if output.contains(NOT_EXIST) {
        Err(EngineError::NotExist { output })
    } else {
        Err(EngineError::Runtime { reason, output })
    }
}
