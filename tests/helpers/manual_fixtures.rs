//! Manual and game directories on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const FUNCTIONS: &str = "\
-- Global functions
CBlob@ getBlobByNetworkID(u16 netid)
CRules@ getRules()
void print(const string &in text)
void print(const string &in text, SColor color)
f32 Maths::Sqrt(f32 value) const
this line is not a function
";

pub const HOOKS: &str = "\
void onInit(CBlob@ this)
void onTick(CBlob@ this)
bool canBePickedUp(CBlob@ this, CBlob@ byBlob)
";

pub const VARIABLES: &str = "\
CRules@ rules
Engine::u32 tick
";

pub const ENUMS: &str = "\
Team
\tblue
\tred
Hitters::hits
\tfire
";

pub const CBLOB: &str = "\
<constructor>()
f32 getHealth() const
CSprite@ getSprite()
void server_Hit(CBlob@, Vec2f, Vec2f, f32, u8)
void server_Hit(CBlob@, Vec2f, Vec2f, f32, u8, bool)
bool server
f32 health
";

pub const CSPRITE: &str = "\
void SetZ(f32 z)
bool isVisible()
";

pub const ANY: &str = "\
void anything()
";

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

/// A manual root containing `interface/` with every documentation file.
pub fn sample_manual() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "interface/Functions.txt", FUNCTIONS);
    write(temp.path(), "interface/Hooks.txt", HOOKS);
    write(temp.path(), "interface/Variables.txt", VARIABLES);
    write(temp.path(), "interface/Enums.txt", ENUMS);
    write(temp.path(), "interface/Objects/CBlob.txt", CBLOB);
    write(temp.path(), "interface/Objects/CSprite.txt", CSPRITE);
    write(temp.path(), "interface/Objects/any.txt", ANY);
    temp
}

/// A game root containing `Base/` with the given scripts.
pub fn game_with_scripts(scripts: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("Base")).unwrap();
    for (relative, text) in scripts {
        write(&temp.path().join("Base"), relative, text);
    }
    temp
}
