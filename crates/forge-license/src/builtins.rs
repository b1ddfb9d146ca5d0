//! Built-in licenses and identifier aliases

use crate::license::License;

const LICENSES: &[(&str, &str, &str, &str)] = &[
    (
        "MIT",
        "MIT License",
        "A short and simple permissive license with conditions only requiring preservation of copyright and license notices.",
        include_str!("../licenses/MIT.txt"),
    ),
    (
        "Apache-2.0",
        "Apache License 2.0",
        "A permissive license whose main conditions require preservation of copyright and license notices.",
        include_str!("../licenses/Apache-2.0.txt"),
    ),
    (
        "GPL-3.0",
        "GNU General Public License v3.0",
        "Permissions of this strong copyleft license are conditioned on making available complete source code.",
        include_str!("../licenses/GPL-3.0.txt"),
    ),
    (
        "BSD-3-Clause",
        "BSD 3-Clause License",
        "A permissive license similar to BSD 2-Clause License, but with a 3rd clause prohibiting use of project name.",
        include_str!("../licenses/BSD-3-Clause.txt"),
    ),
    (
        "ISC",
        "ISC License",
        "A permissive license functionally equivalent to the BSD 2-Clause and MIT licenses.",
        include_str!("../licenses/ISC.txt"),
    ),
    (
        "Unlicense",
        "The Unlicense",
        "A license with no conditions whatsoever which dedicates works to the public domain.",
        include_str!("../licenses/Unlicense.txt"),
    ),
    (
        "MPL-2.0",
        "Mozilla Public License 2.0",
        "A weak copyleft license that allows mixing of code with different licenses.",
        include_str!("../licenses/MPL-2.0.txt"),
    ),
];

/// Lowercase alias to canonical id.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("mit", "MIT"),
    ("apache", "Apache-2.0"),
    ("apache 2.0", "Apache-2.0"),
    ("apache2", "Apache-2.0"),
    ("apache-2", "Apache-2.0"),
    ("gpl", "GPL-3.0"),
    ("gpl3", "GPL-3.0"),
    ("gpl-3", "GPL-3.0"),
    ("gplv3", "GPL-3.0"),
    ("bsd", "BSD-3-Clause"),
    ("bsd3", "BSD-3-Clause"),
    ("bsd-3", "BSD-3-Clause"),
    ("isc", "ISC"),
    ("unlicense", "Unlicense"),
    ("public domain", "Unlicense"),
    ("mpl", "MPL-2.0"),
    ("mpl2", "MPL-2.0"),
    ("mpl-2", "MPL-2.0"),
    ("mozilla", "MPL-2.0"),
];

pub(crate) fn licenses() -> Vec<License> {
    LICENSES
        .iter()
        .map(|&(id, title, description, body)| License::new(id, title, description, body))
        .collect()
}
