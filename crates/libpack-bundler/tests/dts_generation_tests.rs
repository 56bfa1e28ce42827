//! Declaration aggregation tests against real TypeScript fixtures.

use std::fs;

use libpack_bundler::{generate_declaration_fragments, DtsSource, Error};
use tempfile::TempDir;

#[test]
fn fragments_come_back_in_input_order() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.ts");
    let second = temp.path().join("b.ts");
    fs::write(&first, "export const a: number = 1;\n").unwrap();
    fs::write(&second, "export const b: string = \"two\";\n").unwrap();

    let sources = [DtsSource::new(&first), DtsSource::new(&second)];
    let fragments = generate_declaration_fragments(&sources, false).unwrap();

    assert_eq!(fragments.len(), 2);
    assert!(fragments[0].contains("a: number"));
    assert!(fragments[1].contains("b: string"));
}

#[test]
fn exported_type_surface_is_aggregated() {
    let temp = TempDir::new().unwrap();
    let entry = temp.path().join("index.ts");
    fs::write(
        &entry,
        r#"
export type Mode = "on" | "off";

export interface Options {
    mode: Mode;
    retries?: number;
}

export class Toggle {
    constructor(private options: Options) {}
    flip(): Mode {
        return this.options.mode === "on" ? "off" : "on";
    }
}

export default function create(options: Options): Toggle {
    return new Toggle(options);
}
"#,
    )
    .unwrap();

    let fragments =
        generate_declaration_fragments(&[DtsSource::new(&entry)], false).unwrap();
    let dts = fragments.join("\n");

    assert!(dts.contains("export type Mode"));
    assert!(dts.contains("interface Options"));
    assert!(dts.contains("class Toggle"));
    assert!(dts.contains("export default function create"));
    // Implementation bodies never leak into declarations.
    assert!(!dts.contains("==="));
}

#[test]
fn syntax_error_propagates() {
    let temp = TempDir::new().unwrap();
    let entry = temp.path().join("index.ts");
    fs::write(&entry, "export const : = broken;;;(").unwrap();

    let err = generate_declaration_fragments(&[DtsSource::new(&entry)], false).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn strip_internal_removes_tagged_exports() {
    let temp = TempDir::new().unwrap();
    let entry = temp.path().join("index.ts");
    fs::write(
        &entry,
        r#"
/** @internal */
export const secret: number = 1;

export const public_api: number = 2;
"#,
    )
    .unwrap();

    let stripped =
        generate_declaration_fragments(&[DtsSource::new(&entry)], true).unwrap();
    assert!(!stripped[0].contains("secret"));
    assert!(stripped[0].contains("public_api"));
}
