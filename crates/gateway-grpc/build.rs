//! Build script for compiling protobuf definitions.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server stubs are only used by the in-process test server
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["../../proto/users.proto"], &["../../proto"])?;

    println!("cargo:rerun-if-changed=../../proto/");

    Ok(())
}
