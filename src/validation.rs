use std::fmt;

use web_sys::{File, FileList};
use yew::Callback;

use crate::constants::FILE_TOO_LARGE_MESSAGE;

/// Anything the picker can hand over for validation.
pub trait UploadCandidate {
    /// Size in bytes.
    fn size(&self) -> f64;
}

impl UploadCandidate for File {
    fn size(&self) -> f64 {
        web_sys::Blob::size(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    FileTooLarge { size: f64, limit: f64 },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::FileTooLarge { .. } => f.write_str(FILE_TOO_LARGE_MESSAGE),
        }
    }
}

impl std::error::Error for UploadError {}

/// Outcome of validating a single picked file.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<F> {
    Accepted(F),
    Rejected(UploadError),
}

impl<F> Selection<F> {
    /// Reports the outcome to the owner of the file/error state.
    ///
    /// An accepted file clears the error first, then hands over the file.
    /// A rejected file clears the file first, then reports the message.
    pub fn dispatch(
        self,
        set_file: &Callback<Option<F>>,
        set_upload_file_error: &Callback<String>,
    ) {
        match self {
            Selection::Accepted(file) => {
                set_upload_file_error.emit(String::new());
                set_file.emit(Some(file));
            }
            Selection::Rejected(error) => {
                set_file.emit(None);
                set_upload_file_error.emit(error.to_string());
            }
        }
    }
}

/// Files strictly larger than `max_size` are rejected.
pub fn validate_selection<F: UploadCandidate>(file: F, max_size: f64) -> Selection<F> {
    let size = file.size();
    if size > max_size {
        return Selection::Rejected(UploadError::FileTooLarge {
            size,
            limit: max_size,
        });
    }
    Selection::Accepted(file)
}

/// Runs one change event through validation. No file means the dialog was
/// cancelled, and neither callback fires.
pub fn handle_selection<F: UploadCandidate>(
    file: Option<F>,
    max_size: f64,
    set_file: &Callback<Option<F>>,
    set_upload_file_error: &Callback<String>,
) {
    if let Some(file) = file {
        validate_selection(file, max_size).dispatch(set_file, set_upload_file_error);
    }
}

/// First entry of the input's file list. `None` when the dialog was cancelled.
pub fn first_file(files: Option<FileList>) -> Option<File> {
    files.and_then(|files| files.get(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_FILE_UPLOAD_SIZE;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        name: &'static str,
        size: f64,
    }

    impl UploadCandidate for FakeFile {
        fn size(&self) -> f64 {
            self.size
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetFile(Option<FakeFile>),
        SetError(String),
    }

    fn recorder() -> (Rc<RefCell<Vec<Call>>>, Callback<Option<FakeFile>>, Callback<String>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let set_file = {
            let calls = calls.clone();
            Callback::from(move |file| calls.borrow_mut().push(Call::SetFile(file)))
        };
        let set_error = {
            let calls = calls.clone();
            Callback::from(move |msg| calls.borrow_mut().push(Call::SetError(msg)))
        };
        (calls, set_file, set_error)
    }

    fn select(file: FakeFile, set_file: &Callback<Option<FakeFile>>, set_error: &Callback<String>) {
        handle_selection(Some(file), MAX_FILE_UPLOAD_SIZE, set_file, set_error);
    }

    #[test]
    fn small_file_is_accepted_and_clears_error() {
        let (calls, set_file, set_error) = recorder();
        let file = FakeFile { name: "notes.txt", size: 512.0 };

        select(file.clone(), &set_file, &set_error);

        assert_eq!(
            *calls.borrow(),
            vec![Call::SetError(String::new()), Call::SetFile(Some(file))]
        );
    }

    #[test]
    fn oversized_file_clears_file_and_reports_message() {
        let (calls, set_file, set_error) = recorder();
        let file = FakeFile { name: "movie.mkv", size: MAX_FILE_UPLOAD_SIZE + 1.0 };

        select(file, &set_file, &set_error);

        assert_eq!(
            *calls.borrow(),
            vec![
                Call::SetFile(None),
                Call::SetError(
                    "File too large, please upload a file smaller than 10mb".to_string()
                ),
            ]
        );
    }

    #[test]
    fn file_exactly_at_limit_is_accepted() {
        let file = FakeFile { name: "edge.bin", size: MAX_FILE_UPLOAD_SIZE };
        assert_eq!(
            validate_selection(file.clone(), MAX_FILE_UPLOAD_SIZE),
            Selection::Accepted(file)
        );
    }

    #[test]
    fn rejection_carries_size_and_limit() {
        let file = FakeFile { name: "big.iso", size: 2048.0 };
        assert_eq!(
            validate_selection(file, 1024.0),
            Selection::Rejected(UploadError::FileTooLarge { size: 2048.0, limit: 1024.0 })
        );
    }

    #[test]
    fn empty_file_is_accepted() {
        let file = FakeFile { name: "empty", size: 0.0 };
        assert!(matches!(validate_selection(file, MAX_FILE_UPLOAD_SIZE), Selection::Accepted(_)));
    }

    #[test]
    fn repeated_selection_gives_same_calls() {
        let (calls, set_file, set_error) = recorder();
        let file = FakeFile { name: "report.pdf", size: 4096.0 };

        select(file.clone(), &set_file, &set_error);
        select(file.clone(), &set_file, &set_error);

        let calls = calls.borrow();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[..2], calls[2..]);
        assert!(!calls.contains(&Call::SetFile(None)));
    }

    #[test]
    fn error_display_matches_message() {
        let err = UploadError::FileTooLarge { size: 1.0, limit: 0.0 };
        assert_eq!(err.to_string(), FILE_TOO_LARGE_MESSAGE);
    }

    #[test]
    fn missing_file_list_selects_nothing() {
        assert!(first_file(None).is_none());
    }

    #[test]
    fn cancelled_dialog_fires_no_callback() {
        let (calls, set_file, set_error) = recorder();

        handle_selection(None, MAX_FILE_UPLOAD_SIZE, &set_file, &set_error);

        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn rejection_after_acceptance_clears_file() {
        let (calls, set_file, set_error) = recorder();
        let small = FakeFile { name: "logo.png", size: 1024.0 };
        let big = FakeFile { name: "backup.tar", size: MAX_FILE_UPLOAD_SIZE * 2.0 };

        select(small, &set_file, &set_error);
        calls.borrow_mut().clear();
        select(big, &set_file, &set_error);

        assert_eq!(
            *calls.borrow(),
            vec![Call::SetFile(None), Call::SetError(FILE_TOO_LARGE_MESSAGE.to_string())]
        );
    }
}
