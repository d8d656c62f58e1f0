//! Shipped distribution dataset.
//!
//! Popularity is DistroWatch hits per day at the time the dataset was
//! curated. Order matters: it is the tie-break order used by the matcher.

use crate::{Attributes, CatalogItem, Trend};

#[expect(
    clippy::too_many_arguments,
    reason = "one positional row per dataset entry keeps the table readable"
)]
fn entry(
    id: &str,
    name: &str,
    rolling: u8,
    easy: u8,
    diy: u8,
    performance: u8,
    dev_focus: u8,
    popularity: u32,
    trend: Trend,
) -> CatalogItem {
    CatalogItem {
        id: id.to_owned(),
        name: name.to_owned(),
        attributes: Attributes {
            rolling,
            easy,
            diy,
            performance,
            dev_focus,
        },
        popularity,
        trend,
    }
}

pub(super) fn items() -> (CatalogItem, Vec<CatalogItem>) {
    // Desktop-friendly mainstream.
    let first = entry("cachyos", "CachyOS", 10, 6, 6, 10, 9, 3698, Trend::Rising);
    let rest = vec![
        entry("mint", "Linux Mint", 1, 10, 2, 6, 6, 2714, Trend::Declining),
        entry("mx", "MX Linux", 3, 8, 4, 6, 6, 1951, Trend::Stable),
        entry("debian", "Debian", 1, 7, 6, 7, 8, 1589, Trend::Stable),
        entry("endeavour", "EndeavourOS", 10, 7, 7, 8, 9, 1529, Trend::Rising),
        entry("pop", "Pop!_OS", 4, 9, 3, 8, 9, 1346, Trend::Stable),
        entry("manjaro", "Manjaro", 10, 8, 5, 7, 8, 1105, Trend::Stable),
        entry("ubuntu", "Ubuntu", 2, 10, 2, 7, 9, 1072, Trend::Stable),
        entry("fedora_newlogo_newcolor", "Fedora", 5, 8, 4, 8, 9, 1048, Trend::Stable),
        entry("zorin", "Zorin OS", 1, 10, 1, 6, 5, 1004, Trend::Stable),
        entry("suse", "openSUSE", 6, 7, 6, 8, 8, 789, Trend::Stable),
        entry("nobara", "Nobara", 8, 7, 4, 9, 6, 721, Trend::Rising),
        entry("elementary", "elementary OS", 1, 10, 1, 6, 5, 593, Trend::Stable),
        entry("nixos", "NixOS", 10, 2, 10, 9, 10, 555, Trend::Rising),
        entry("garuda", "Garuda Linux", 10, 7, 6, 9, 8, 452, Trend::Stable),
        entry("kali", "Kali Linux", 5, 5, 6, 6, 7, 419, Trend::Stable),
        entry("arch", "Arch Linux", 10, 3, 10, 9, 9, 373, Trend::Stable),
        entry("alpine", "Alpine Linux", 5, 3, 8, 9, 8, 353, Trend::Rising),
        // Second tier.
        entry("kubuntu", "Kubuntu", 2, 9, 3, 6, 7, 313, Trend::Stable),
        entry("lite", "Linux Lite", 1, 10, 1, 6, 4, 307, Trend::Stable),
        entry("tails", "Tails", 3, 6, 2, 4, 5, 324, Trend::Stable),
        entry("parrot", "Parrot OS", 5, 6, 5, 6, 7, 254, Trend::Stable),
        entry("void", "Void Linux", 10, 3, 9, 9, 8, 203, Trend::Stable),
        entry("gentoo", "Gentoo", 10, 1, 10, 10, 9, 218, Trend::Stable),
        entry("artix", "Artix Linux", 10, 4, 9, 8, 8, 216, Trend::Stable),
        entry("solus", "Solus", 6, 9, 3, 7, 7, 357, Trend::Stable),
        entry("qubes", "Qubes OS", 3, 3, 7, 6, 7, 185, Trend::Stable),
        entry("rebornos", "RebornOS", 10, 7, 6, 8, 8, 150, Trend::Stable),
        // Long tail.
        entry("antix", "antiX", 3, 6, 5, 8, 5, 508, Trend::Stable),
        entry("lubuntu", "Lubuntu", 2, 9, 2, 7, 6, 241, Trend::Stable),
        entry("xubuntu", "Xubuntu", 2, 9, 2, 7, 6, 216, Trend::Stable),
        entry("openmandriva", "OpenMandriva", 6, 7, 4, 7, 7, 262, Trend::Stable),
        entry("deepin", "Deepin", 3, 9, 2, 6, 6, 238, Trend::Stable),
    ];
    (first, rest)
}
