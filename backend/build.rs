use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap()).join("dist");
    let dist_dir = PathBuf::from("../frontend/dist");

    // include_dir! needs the directory even when the frontend was not built
    let _ = fs::remove_dir_all(&out_dir);
    fs::create_dir_all(&out_dir).unwrap();

    if dist_dir.exists() {
        fs_extra::dir::copy(
            &dist_dir,
            &out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
