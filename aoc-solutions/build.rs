//! Compiles every `<solutions>/<year>/day_<NN>/solution.rs` into this crate
//!
//! Emits `year_<year>::day_<NN>` modules pointing at the files with
//! `#[path]`, so newly scaffolded days are picked up on the next build.

use std::{
    collections::BTreeMap,
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

const SOLUTION_FILE: &str = "solution.rs";

fn main() {
    println!("cargo:rerun-if-env-changed=AOC_SOLUTIONS_DIR");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();
    let root = match env::var("AOC_SOLUTIONS_DIR") {
        Ok(dir) if Path::new(&dir).is_absolute() => PathBuf::from(dir),
        Ok(dir) => workspace_root.join(dir),
        Err(_) => workspace_root.join("solutions"),
    };
    println!("cargo:rerun-if-changed={}", root.display());

    let mut mods = String::new();
    for (year, days) in collect(&root) {
        mods.push_str(&format!("pub mod year_{year} {{\n"));
        for (day, path) in days {
            println!("cargo:rerun-if-changed={}", path.display());
            check_declared_id(&path, year, day);
            let abs_path = fs::canonicalize(&path).expect("canonicalize solution path");
            mods.push_str(&format!(
                "    #[path = {:?}]\n    pub mod day_{day:02};\n",
                abs_path.to_string_lossy()
            ));
        }
        mods.push_str("}\n");
    }

    let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    write_if_changed(out.join("solutions_mod.rs"), mods.as_bytes());
}

/// Year -> (day -> solution file); a missing root yields nothing
fn collect(root: &Path) -> BTreeMap<u16, BTreeMap<u8, PathBuf>> {
    let mut years = BTreeMap::new();
    for year_dir in sub_dirs(root) {
        let Some(year) = dir_name(&year_dir).and_then(parse_year) else {
            continue;
        };
        // Years are watched so a new day directory triggers a rebuild
        println!("cargo:rerun-if-changed={}", year_dir.display());

        let days: BTreeMap<u8, PathBuf> = sub_dirs(&year_dir)
            .into_iter()
            .filter_map(|day_dir| {
                let day = dir_name(&day_dir).and_then(parse_day)?;
                let file = day_dir.join(SOLUTION_FILE);
                file.is_file().then_some((day, file))
            })
            .collect();
        if !days.is_empty() {
            years.insert(year, days);
        }
    }
    years
}

/// Warn when a file's YEAR/DAY disagree with its directory
fn check_declared_id(path: &Path, year: u16, day: u8) {
    let Ok(source) = fs::read_to_string(path) else {
        return;
    };
    for (name, expected) in [("YEAR", u32::from(year)), ("DAY", u32::from(day))] {
        match declared_const(&source, name) {
            Some(declared) if declared != expected => println!(
                "cargo:warning={} declares {name} = {declared} but lives under {year}/day_{day:02}",
                path.display()
            ),
            _ => {}
        }
    }
}

/// Value of `const NAME: Option<_> = Some(N)` in `source`, if present
fn declared_const(source: &str, name: &str) -> Option<u32> {
    let start = source.find(&format!("const {name}:"))?;
    let line = source[start..].lines().next()?;
    let value = line.split_once("Some(")?.1;
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn sub_dirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect()
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()
}

fn parse_year(name: &str) -> Option<u16> {
    (name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit()))
        .then(|| name.parse().ok())
        .flatten()
}

fn parse_day(name: &str) -> Option<u8> {
    let digits = name.strip_prefix("day_")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|day| (1..=25).contains(day))
}

fn write_if_changed(path: PathBuf, bytes: &[u8]) {
    if fs::read(&path).ok().as_deref() != Some(bytes) {
        fs::File::create(&path)
            .and_then(|mut f| f.write_all(bytes))
            .expect("write generated solutions module");
    }
}
