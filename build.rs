// build.rs

// Locates (or builds) the native LAPACK, LAPACKE and BLAS libraries the bindings call into.
//
// Default: link system libraries. `LAPACKX_LIBS` lists them (comma separated, default
// "lapacke,lapack,blas") and `LAPACKX_LIB_DIR` optionally adds a search path.
//
// With the `reference-lapack` feature the sources are downloaded and built with cmake.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=LAPACKX_LIBS");
    println!("cargo:rerun-if-env-changed=LAPACKX_LIB_DIR");

    #[cfg(feature = "reference-lapack")]
    {
        source::build_and_link();
    }

    #[cfg(not(feature = "reference-lapack"))]
    {
        link_system();
    }
}

#[cfg(not(feature = "reference-lapack"))]
fn link_system() {
    const DEFAULT_LIBS: &str = "lapacke,lapack,blas";

    if let Ok(dir) = env::var("LAPACKX_LIB_DIR") {
        if !dir.is_empty() {
            println!("cargo:rustc-link-search=native={}", dir);
        }
    }

    let libs = env::var("LAPACKX_LIBS").unwrap_or_else(|_| DEFAULT_LIBS.to_string());
    for lib in libs.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        println!("cargo:rustc-link-lib=dylib={}", lib);
    }
}

#[cfg(feature = "reference-lapack")]
mod source {
    extern crate cmake;
    extern crate curl;

    use cmake::Config;
    use curl::easy::Easy;
    use std::fs::{self, File};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::process::Command;

    const LAPACK_VERSION: &str = "v3.12.0";
    const OPENBLAS_VERSION: &str = "v0.3.28";

    pub fn build_and_link() {
        let out_dir = PathBuf::from(super::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

        let lapack_url = format!(
            "https://github.com/Reference-LAPACK/lapack/archive/refs/tags/{}.tar.gz",
            LAPACK_VERSION
        );
        let openblas_url = format!(
            "https://github.com/xianyi/OpenBLAS/archive/refs/tags/{}.tar.gz",
            OPENBLAS_VERSION
        );

        let lapack_dir = out_dir.join(format!("lapack-{}", &LAPACK_VERSION[1..]));
        let openblas_dir = out_dir.join(format!("OpenBLAS-{}", &OPENBLAS_VERSION[1..]));

        if !openblas_dir.exists() {
            download_and_extract(&openblas_url, &out_dir.join("openblas.tar.gz"), &out_dir)
                .expect("Failed to download and extract OpenBLAS");
        }

        let mut openblas = Config::new(&openblas_dir);
        openblas
            .define("BUILD_SHARED_LIBS", "OFF")
            .define("CMAKE_POSITION_INDEPENDENT_CODE", "ON")
            .define("NO_SHARED", "ON")
            .define("NO_STATIC", "OFF");
        if cfg!(feature = "ilp64") {
            openblas.define("INTERFACE64", "1");
        }
        let openblas_dst = openblas.build();

        if !lapack_dir.exists() {
            download_and_extract(&lapack_url, &out_dir.join("lapack.tar.gz"), &out_dir)
                .expect("Failed to download and extract LAPACK");
        }

        let mut lapack = Config::new(&lapack_dir);
        lapack
            .define("CMAKE_Fortran_COMPILER", "gfortran")
            .define("BUILD_SHARED_LIBS", "OFF")
            .define("LAPACKE", "ON")
            .define("CMAKE_POSITION_INDEPENDENT_CODE", "ON")
            .define(
                "BLAS_LIBRARIES",
                format!("{}/lib/libopenblas.a", openblas_dst.display()).as_str(),
            )
            .define("BLAS", "OpenBLAS");
        if cfg!(feature = "ilp64") {
            lapack.define("BUILD_INDEX64", "ON");
        }
        let lapack_dst = lapack.build();

        let suffix = if cfg!(feature = "ilp64") { "64" } else { "" };

        println!("cargo:rustc-link-search=native={}/lib", lapack_dst.display());
        println!("cargo:rustc-link-search=native={}/lib64", lapack_dst.display());
        println!("cargo:rustc-link-lib=static=lapacke{}", suffix);
        println!("cargo:rustc-link-lib=static=lapack{}", suffix);

        println!("cargo:rustc-link-search=native={}/lib", openblas_dst.display());
        println!("cargo:rustc-link-lib=static=openblas");

        println!("cargo:rustc-link-lib=dylib=gfortran");

        fs::remove_file(out_dir.join("openblas.tar.gz")).ok();
        fs::remove_file(out_dir.join("lapack.tar.gz")).ok();
    }

    fn download_and_extract(url: &str, tarball: &Path, output_dir: &Path) -> io::Result<()> {
        download_file(url, tarball)?;
        extract_tarball(tarball, output_dir)
    }

    fn download_file(url: &str, file_path: &Path) -> io::Result<()> {
        let mut easy = Easy::new();
        easy.url(url).map_err(io::Error::other)?;
        easy.follow_location(true).map_err(io::Error::other)?;

        let mut response = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    response.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(io::Error::other)?;
            transfer.perform().map_err(io::Error::other)?;
        }

        let mut file = File::create(file_path)?;
        file.write_all(&response)?;
        Ok(())
    }

    fn extract_tarball(tarball: &Path, output_dir: &Path) -> io::Result<()> {
        let output = Command::new("tar")
            .arg("-xzf")
            .arg(tarball)
            .arg("-C")
            .arg(output_dir)
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "Failed to extract tarball {}: {}",
                tarball.display(),
                String::from_utf8_lossy(&output.stderr)
            )));
        }
        Ok(())
    }
}
