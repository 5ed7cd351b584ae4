//! Test fixture generators

use std::fs;
use std::path::Path;

use hanzi_core::features::decomposition::DecompositionGraphBuilder;
use hanzi_core::DecompositionGraph;

/// Small IDS file covering every line class the builder distinguishes
pub const SAMPLE_IDS: &str = "\
# sample IDS data
U+4E00\t一\t^一$(GHJKTV)
U+4EBA\t人\t^人$(GHJKTV)
U+4ECE\t从\t^⿰人人$(GHJKTV)
U+4F17\t众\t^⿱人从$(GHJKTV)
U+4F60\t你\t^⿰亻尔$(GHJKTV)
U+4ED6\t他\t^⿰亻也$(GHJKTV)
U+597D\t好\t^⿰女子$(GHJKTV)
U+5B57\t字\t^⿱宀子$(GHJKTV)
U+5988\t妈\t^⿰女马$(GHJKTV)

U+20001\t𠀁\t^⿱一{1}$(G)
U+4E01\t丁
U+4E8C\t二\t^⿱一$(G)
U+4F60\t你\t^⿰亻尔$(GHJKTV)
U+5B57\t字\t^⿱宀孑$(X)
";

/// Leveled vocabulary as `(tier, csv body)`; headword in the third column
pub const SAMPLE_HSK: [(u8, &str); 6] = [
    (1, "1,ni3,你,you\n2,hao3,好,good\n3,ta1,他,he\n4,ma1ma,妈妈(妈),mom\n"),
    (2, "1,ta1men,他们,they\n2,zi4,字,character\n"),
    (3, "1,ren2,人,person\n"),
    (4, "1,cong2,从,from\n"),
    (5, ""),
    (6, "1,zhong4,众,crowd\nbroken-row\n"),
];

/// `idx,char,count,percentage`
pub const SAMPLE_FREQUENCIES: &str = "\
1,的,7922684,4.09
2,一,3050722,1.57
3,人,1837533,0.95
4,他,1246591,0.64
5,你,1108124,0.57
6,好,473286,0.24
";

pub fn sample_graph() -> DecompositionGraph {
    DecompositionGraphBuilder::from_str(SAMPLE_IDS).0
}

/// Build a graph from `(grapheme, sequence)` pairs, panicking on bad input
pub fn graph_of(records: &[(char, &str)]) -> DecompositionGraph {
    let mut graph = DecompositionGraph::new();
    for &(grapheme, sequence) in records {
        graph
            .insert(hanzi_core::StructuralRecord::new(grapheme, sequence))
            .expect("fixture record must insert");
    }
    graph
}

/// Lay out `ids.txt`, `hsk/hsk_{1..6}.csv` and `freq.csv` under `root`
pub fn write_data_dir(root: &Path) {
    fs::write(root.join("ids.txt"), SAMPLE_IDS).unwrap();
    let hsk = root.join("hsk");
    fs::create_dir_all(&hsk).unwrap();
    for (tier, body) in SAMPLE_HSK {
        fs::write(hsk.join(format!("hsk_{}.csv", tier)), body).unwrap();
    }
    fs::write(root.join("freq.csv"), SAMPLE_FREQUENCIES).unwrap();
}
