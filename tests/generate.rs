#[cfg(test)]
mod tests {
    use iconsmith::render::generate_iconset;
    use iconsmith::spec::ICONSET;
    use image::ImageReader;
    use std::fs;

    #[test]
    fn generates_exactly_the_ten_iconset_files() {
        let dir = tempfile::tempdir().unwrap();
        generate_iconset(dir.path()).unwrap();

        let mut written: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        written.sort();

        let mut expected: Vec<String> =
            ICONSET.iter().map(|s| s.filename.to_string()).collect();
        expected.sort();

        assert_eq!(written, expected);
    }

    #[test]
    fn every_output_decodes_to_its_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        generate_iconset(dir.path()).unwrap();

        for spec in ICONSET {
            let path = dir.path().join(spec.filename);
            assert!(fs::metadata(&path).unwrap().len() > 0, "{}", spec.filename);

            let img = ImageReader::open(&path).unwrap().decode().unwrap();
            assert_eq!(img.width(), spec.size, "{}", spec.filename);
            assert_eq!(img.height(), spec.size, "{}", spec.filename);
            assert!(img.color().has_alpha(), "{}", spec.filename);
        }
    }

    #[test]
    fn rerunning_overwrites_in_place_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        generate_iconset(dir.path()).unwrap();
        let small = fs::read(dir.path().join("icon_16x16.png")).unwrap();
        let large = fs::read(dir.path().join("icon_512x512@2x.png")).unwrap();

        generate_iconset(dir.path()).unwrap();

        let count = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, ICONSET.len());
        assert_eq!(small, fs::read(dir.path().join("icon_16x16.png")).unwrap());
        assert_eq!(large, fs::read(dir.path().join("icon_512x512@2x.png")).unwrap());
    }

    #[test]
    fn missing_output_directory_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");
        assert!(generate_iconset(&missing).is_err());
    }
}
