#![cfg(target_arch = "wasm32")]

use transform_canvas::viewport_size;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_viewport_size_is_readable() {
    let (width, height) = viewport_size().unwrap();
    assert!(width > 0.0);
    assert!(height > 0.0);
}
