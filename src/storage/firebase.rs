//! Storage SDK Bindings
//!
//! Bindings to the Firebase compat namespace (`window.firebase`) loaded by
//! `index.html`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::config::FirebaseConfig;
use crate::error::StorageError;
use super::UploadEvent;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp, catch)]
    fn initialize_app(options: &JsValue) -> Result<JsValue, JsValue>;

    type Storage;

    #[wasm_bindgen(js_namespace = firebase, js_name = storage, catch)]
    fn storage() -> Result<Storage, JsValue>;

    #[wasm_bindgen(method, js_name = ref)]
    fn reference(this: &Storage, path: &str) -> StorageRef;

    type StorageRef;

    #[wasm_bindgen(method)]
    fn put(this: &StorageRef, file: &web_sys::File) -> UploadTask;

    #[wasm_bindgen(method, js_name = getDownloadURL, catch)]
    async fn get_download_url(this: &StorageRef) -> Result<JsValue, JsValue>;

    #[derive(Clone)]
    type UploadTask;

    #[wasm_bindgen(method)]
    fn on(
        this: &UploadTask,
        event: &str,
        next: &Closure<dyn FnMut(UploadSnapshot)>,
        error: &Closure<dyn FnMut(JsValue)>,
        complete: &Closure<dyn FnMut()>,
    );

    #[wasm_bindgen(method, getter)]
    fn snapshot(this: &UploadTask) -> UploadSnapshot;

    type UploadSnapshot;

    #[wasm_bindgen(method, getter, js_name = bytesTransferred)]
    fn bytes_transferred(this: &UploadSnapshot) -> f64;

    #[wasm_bindgen(method, getter, js_name = totalBytes)]
    fn total_bytes(this: &UploadSnapshot) -> f64;

    #[wasm_bindgen(method, getter, js_name = ref)]
    fn reference(this: &UploadSnapshot) -> StorageRef;
}

/// Initialize the SDK app once at start-up
pub fn init_storage(config: &FirebaseConfig) -> Result<(), StorageError> {
    let options = serde_wasm_bindgen::to_value(config).map_err(|e| StorageError::Sdk(e.to_string()))?;
    initialize_app(&options)?;
    log::info!("storage SDK initialized for bucket '{}'", config.storage_bucket);
    Ok(())
}

/// Callbacks registered on one upload task
struct TaskCallbacks {
    _next: Closure<dyn FnMut(UploadSnapshot)>,
    _error: Closure<dyn FnMut(JsValue)>,
    _complete: Closure<dyn FnMut()>,
}

type CallbackSlot = Rc<RefCell<Option<TaskCallbacks>>>;

/// Empty `slot` once the current JS turn is over, so a callback stored in it
/// is never freed while it is still running.
fn release<T: 'static>(slot: &Rc<RefCell<Option<T>>>) {
    let slot = slot.clone();
    wasm_bindgen_futures::spawn_local(async move {
        slot.borrow_mut().take();
    });
}

/// Start uploading `file` under `key`.
///
/// `on_event` receives every progress tick, then exactly one of
/// `Failed` or `Completed`. The task's callbacks are freed after that.
pub fn upload_avatar(
    file: &web_sys::File,
    key: &str,
    on_event: impl Fn(UploadEvent) + 'static,
) -> Result<(), StorageError> {
    let task = storage()?.reference(key).put(file);
    let on_event: Rc<dyn Fn(UploadEvent)> = Rc::new(on_event);
    let slot: CallbackSlot = Rc::new(RefCell::new(None));

    let next = {
        let on_event = on_event.clone();
        Closure::<dyn FnMut(UploadSnapshot)>::new(move |snapshot: UploadSnapshot| {
            on_event(UploadEvent::Progress {
                bytes_transferred: snapshot.bytes_transferred(),
                total_bytes: snapshot.total_bytes(),
            });
        })
    };

    let error = {
        let on_event = on_event.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            let err = StorageError::from(err);
            log::error!("avatar upload failed: {}", err);
            on_event(UploadEvent::Failed(err.to_string()));
            release(&slot);
        })
    };

    let complete = {
        let task = task.clone();
        let slot = slot.clone();
        Closure::<dyn FnMut()>::new(move || {
            let task = task.clone();
            let on_event = on_event.clone();
            let slot = slot.clone();
            spawn_local(async move {
                match task.snapshot().reference().get_download_url().await {
                    Ok(url) => match url.as_string() {
                        Some(download_url) => on_event(UploadEvent::Completed { download_url }),
                        None => on_event(UploadEvent::Failed("download URL is not a string".to_string())),
                    },
                    Err(err) => {
                        let err = StorageError::from(err);
                        log::error!("resolving download URL failed: {}", err);
                        on_event(UploadEvent::Failed(err.to_string()));
                    }
                }
                release(&slot);
            });
        })
    };

    task.on("state_changed", &next, &error, &complete);

    // The slot keeps the callbacks alive until `release` empties it
    *slot.borrow_mut() = Some(TaskCallbacks { _next: next, _error: error, _complete: complete });
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn next_tick() {
        let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
    }

    #[wasm_bindgen_test]
    async fn release_frees_callbacks_after_current_turn() {
        let slot = Rc::new(RefCell::new(Some(Closure::<dyn FnMut()>::new(|| {}))));
        release(&slot);
        assert!(slot.borrow().is_some());

        next_tick().await;
        next_tick().await;
        assert!(slot.borrow().is_none());
    }
}
