//! End-to-end runs of the whole pipeline against small pinout tables.

use std::path::PathBuf;

use pins2c::{generate, Config, Prefix};

const HEADER_ROW: &str =
    "\"ITEM\",\"P176x\",\"PORT\",\"BIT\",\"FUNC1\",\"FUNC2\",\"FUNC3\",\"SIGNAME\",\"FUNC\",\"IN/OUT\",\"MODE\",\"OD\",\"DEF\",\"ACT\"";

fn config() -> Config {
    Config {
        input: PathBuf::from("pinout.csv"),
        prefix: Prefix::new("zebra").unwrap(),
        output_dir: None,
    }
}

fn run(csv: &str) -> (String, String, usize) {
    let mut header = Vec::new();
    let mut source = Vec::new();
    let count = generate(csv, &config(), &mut header, &mut source).unwrap();
    (
        String::from_utf8(header).unwrap(),
        String::from_utf8(source).unwrap(),
        count,
    )
}

#[test]
fn two_row_table_generates_both_files() {
    let csv = format!(
        "{HEADER_ROW}\n\
         1,46,0,0,\"RD1\",\"TXD3\",\"SDA1\",\"GSM_TX\",2,0,,,,\n\
         2,47,0,1,\"TD1\",\"RXD3\",\"SCL1\",\"GSM_RX\",2,1,,,,\n"
    );
    let (header, source, count) = run(&csv);

    assert_eq!(count, 2);

    // Declarations stream.
    assert!(header.contains("typedef struct tagZEBRA_PINDEF {\n"));
    assert!(header.contains("extern const ZEBRA_PINDEF ZEBRA_GSM_TX;\n"));
    assert!(header.contains("extern const ZEBRA_PINDEF ZEBRA_GSM_RX;\n"));
    assert!(header.contains("#define NUM_PINDEFS (2)\n"));
    assert!(header.contains("extern const ZEBRA_PINDEF* ZEBRA_PINS[NUM_PINDEFS];\n"));

    // Both pins select function 2: fields [0:1] and [2:3] of PINSEL0.
    assert!(header.contains("#define ZEBRA_PINSEL0_INIT (0x0000000a)\n"));
    // GSM_TX is an output on bit 0, GSM_RX an input on bit 1.
    assert!(header.contains("#define ZEBRA_FIODIR0_INIT (0x00000001)\n"));
    // Neither pin uses function 0, so everything stays masked.
    assert!(header.contains("#define ZEBRA_FIOMASK0_INIT (0xffffffff)\n"));

    // Definitions stream.
    assert!(source.contains("#include \"zebra_gpio.h\"\n"));
    assert!(source.contains(
        "const ZEBRA_PINDEF ZEBRA_GSM_TX = { 0, 46, 0, 0, \"RD1\", \"TXD3\", \"SDA1\", \"GSM_TX\", 2, 0, 0, 0, 0, 1 };\n"
    ));
    assert!(source.contains(
        "const ZEBRA_PINDEF ZEBRA_GSM_RX = { 1, 47, 0, 1, \"TD1\", \"RXD3\", \"SCL1\", \"GSM_RX\", 2, 1, 0, 0, 0, 1 };\n"
    ));
    assert!(source.contains("&ZEBRA_GSM_TX, &ZEBRA_GSM_RX, \n"));
}

#[test]
fn skipped_rows_do_not_consume_sequence_indices() {
    let csv = format!(
        "{HEADER_ROW}\n\
         1,N/A,0,0,,,,\"NOT_BONDED\",,,,,,\n\
         2,10,0,2,,,,\"FIRST\",0,0,,,,\n\
         3,0,0,3,,,,\"ABSENT\",,,,,,\n\
         4,11,0,4,,,,,0,0,,,,\n\
         5,12,0,5,,,,\"SECOND\",0,1,,,,\n"
    );
    let (header, source, count) = run(&csv);

    assert_eq!(count, 2);
    assert!(source.contains("const ZEBRA_PINDEF ZEBRA_FIRST = { 0, 10,"));
    assert!(source.contains("const ZEBRA_PINDEF ZEBRA_SECOND = { 1, 12,"));
    assert!(!header.contains("extern const ZEBRA_PINDEF ZEBRA_NOT_BONDED;"));
    assert!(!source.contains("ABSENT"));
    // Both pins are on function 0, so their mask bits clear.
    assert!(header.contains("#define ZEBRA_FIOMASK0_INIT (0xffffffdb)\n"));
}

#[test]
fn end_line_stops_the_scan_but_not_the_echo() {
    let csv = format!(
        "{HEADER_ROW}\n\
         1,46,0,0,,,,\"BEFORE\",0,0,,,,\n\
         END\n\
         2,47,0,1,,,,\"AFTER\",0,0,,,,\n"
    );
    let (header, _source, count) = run(&csv);

    assert_eq!(count, 1);
    assert!(header.contains("extern const ZEBRA_PINDEF ZEBRA_BEFORE;\n"));
    assert!(!header.contains("extern const ZEBRA_PINDEF ZEBRA_AFTER;\n"));
    // The echo reproduces the entire file, END line and beyond included.
    assert!(header.contains("//0003: END\n"));
    assert!(header.contains("//0004: 2,47,0,1,,,,\"AFTER\",0,0,,,,\n"));
}

#[test]
fn malformed_field_reports_line_and_field() {
    let csv = format!(
        "{HEADER_ROW}\n\
         1,46,0,0,,,,\"FINE\",0,0,,,,\n\
         2,47,zero,1,,,,\"BROKEN\",0,0,,,,\n"
    );
    let mut header = Vec::new();
    let mut source = Vec::new();
    let err = generate(&csv, &config(), &mut header, &mut source).unwrap_err();
    assert_eq!(
        err.downcast::<pins2c::Error>().unwrap(),
        pins2c::Error::MalformedField {
            line: 3,
            field: 2,
            text: "zero".to_string(),
        }
    );
    // The pin accepted before the failure has already been emitted; the
    // partial output is the caller's problem.
    assert!(String::from_utf8(source).unwrap().contains("ZEBRA_FINE"));
}

#[test]
fn intake_stops_silently_at_capacity() {
    let mut csv = format!("{HEADER_ROW}\n");
    for i in 0..300 {
        csv.push_str(&format!("{},{},0,0,,,,\"SIG_{i:03}\",0,0,,,,\n", i + 1, i + 10));
    }
    let (header, _source, count) = run(&csv);

    assert_eq!(count, pins2c::MAX_PINS);
    assert!(header.contains("#define NUM_PINDEFS (256)\n"));
    assert!(header.contains("extern const ZEBRA_PINDEF ZEBRA_SIG_255;\n"));
    assert!(!header.contains("extern const ZEBRA_PINDEF ZEBRA_SIG_256;\n"));
    // Unprocessed rows still show up in the echo.
    assert!(header.contains("//0301: 300,309,0,0,,,,\"SIG_299\",0,0,,,,\n"));
}

#[test]
fn bom_on_the_header_row_is_ignored() {
    let csv = format!(
        "\u{feff}{HEADER_ROW}\n\
         1,46,2,5,,,,\"LED\",0,0,,,,\n"
    );
    let (header, _source, count) = run(&csv);

    assert_eq!(count, 1);
    assert!(header.contains("#define ZEBRA_FIOMASK2_INIT (0xffffffdf)\n"));
    assert!(header.starts_with("//*"));
    assert!(header.contains("//0001: \"ITEM\""));
}
