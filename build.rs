use std::env;

fn main() {
    // This tells Cargo to rerun this script if the link override changes.
    println!("cargo:rerun-if-env-changed=ASSIMP_LIB_DIR");

    if let Some(dir) = env::var_os("ASSIMP_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
    println!("cargo:rustc-link-lib=dylib=assimp");
}
