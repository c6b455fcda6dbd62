/// Package a skill folder into an archive and build directory.
pub mod package;
