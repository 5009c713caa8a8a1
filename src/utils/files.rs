use std::fs;

pub fn read_file(file_name: &str) -> std::io::Result<String> {
    return fs::read_to_string(file_name);
}

pub fn write_file(file_name: &str, contents: &str) -> std::io::Result<()> {
    return fs::write(file_name, contents);
}
