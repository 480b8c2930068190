// Build script for the FFI layer
//
// flutter_rust_bridge v2 codegen runs out-of-band via
// `flutter_rust_bridge_codegen generate`, which emits the Dart bindings
// and src/bridge_generated.rs; running it from build.rs interferes with
// plain cargo builds, so this script only handles linking concerns.

fn main() {
    println!("cargo:rerun-if-changed=src/api.rs");

    // Android cdylib builds need libc++_shared so symbols like
    // __cxa_pure_virtual resolve on all ABIs.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("android") {
        println!("cargo:rustc-link-lib=c++_shared");
    }
}
