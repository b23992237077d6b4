fn main() {
    // Bindings come from the #[uniffi::export] proc-macros, so there is no
    // UDL to compile; only track the files that feed them.
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
