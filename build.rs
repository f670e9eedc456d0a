// build.rs

//! build.rs — locate METIS and generate the Rust FFI bindings used by the
//! `MetisNodeNd` ordering backend.
//!
//! Two discovery modes are supported:
//!  • Default (pkg-config):  use `pkg_config::probe("metis")`
//!  • Manual    (env-vars):  `METIS_NO_PKG_CONFIG=1` plus `METIS_DIR` or
//!                           (`METIS_LIB_DIR` + `METIS_INCLUDE_DIR`).
//!
//! The generated `metis_bindings.rs` lands in `OUT_DIR`. Every
//! `extern "C" { … }` block is rewritten to `unsafe extern "C" { … }`, which
//! edition 2024 requires.

#[cfg(feature = "metis-support")]
fn main() {
    use regex::Regex;
    use std::env;
    use std::fs::{read_to_string, write};
    use std::path::PathBuf;

    // ─── 1. Find METIS include/lib directories ───────────────────────────────────
    let include_dir = if env::var_os("METIS_NO_PKG_CONFIG").is_some() {
        let prefix =
            env::var("METIS_DIR").expect("METIS_DIR must be set when METIS_NO_PKG_CONFIG=1");
        let inc = env::var("METIS_INCLUDE_DIR").unwrap_or_else(|_| format!("{}/include", &prefix));
        let lib = env::var("METIS_LIB_DIR").unwrap_or_else(|_| format!("{}/lib", &prefix));

        println!("cargo:rustc-link-search=native={}", lib);
        println!("cargo:rustc-link-lib=dylib=metis");
        inc
    } else {
        let lib = pkg_config::Config::new()
            .statik(false)
            .probe("metis")
            .expect("Could not find METIS via pkg-config; set METIS_NO_PKG_CONFIG=1 to bypass");
        lib.include_paths
            .first()
            .unwrap_or_else(|| panic!("pkg-config returned no include path for METIS"))
            .display()
            .to_string()
    };

    // ─── 2. Generate + post-process `metis_bindings.rs` ─────────────────────────
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let raw_path = out_dir.join("metis_bindings_raw.rs");
    let final_path = out_dir.join("metis_bindings.rs");

    bindgen::Builder::default()
        .header(format!("{}/metis.h", include_dir))
        .allowlist_function("METIS_(NodeND|SetDefaultOptions)")
        .allowlist_type("idx_t")
        .allowlist_type("moptions_et")
        .allowlist_type("rstatus_et")
        .allowlist_var("METIS_NOPTIONS")
        .generate()
        .expect("Failed to generate METIS bindings via bindgen")
        .write_to_file(&raw_path)
        .expect("Couldn't write raw METIS bindings");

    let raw_contents = read_to_string(&raw_path).expect("Unable to read raw METIS bindings");
    let re_extern = Regex::new(r#"(?m)^(?P<prefix>\s*)(?P<block>extern\s+"C"\s*\{)"#)
        .expect("Invalid regex for extern block");
    let with_unsafe_extern = re_extern.replace_all(&raw_contents, |caps: &regex::Captures| {
        format!("{}unsafe {}", &caps["prefix"], &caps["block"])
    });
    write(&final_path, with_unsafe_extern.as_bytes())
        .expect("Unable to write post-processed METIS bindings");

    // ─── 3. Re-run triggers ──────────────────────────────────────────────────────
    println!("cargo:rerun-if-env-changed=METIS_NO_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=METIS_DIR");
    println!("cargo:rerun-if-env-changed=METIS_LIB_DIR");
    println!("cargo:rerun-if-env-changed=METIS_INCLUDE_DIR");
    println!("cargo:rerun-if-changed={}/metis.h", include_dir);
}

#[cfg(not(feature = "metis-support"))]
fn main() {
    // No-op when the “metis-support” feature is disabled
}
