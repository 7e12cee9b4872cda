use lazy_static::lazy_static;

use crate::names::{NameTable, NameTables};

const BONES: &[(&str, &str)] = &[
    ("全ての親", "master"),
    ("センター", "center"),
    ("グルーブ", "groove"),
    ("上半身", "upper body"),
    ("上半身2", "upper body2"),
    ("下半身", "lower body"),
    ("首", "neck"),
    ("頭", "head"),
    ("両目", "eyes"),
    ("左目", "eye_L"),
    ("右目", "eye_R"),
    ("左肩", "shoulder_L"),
    ("左腕", "arm_L"),
    ("左腕捩", "arm twist_L"),
    ("左ひじ", "elbow_L"),
    ("左手捩", "wrist twist_L"),
    ("左手首", "wrist_L"),
    ("右肩", "shoulder_R"),
    ("右腕", "arm_R"),
    ("右腕捩", "arm twist_R"),
    ("右ひじ", "elbow_R"),
    ("右手捩", "wrist twist_R"),
    ("右手首", "wrist_R"),
    ("左足", "leg_L"),
    ("左ひざ", "knee_L"),
    ("左足首", "ankle_L"),
    ("左つま先", "toe_L"),
    ("左足ＩＫ", "leg IK_L"),
    ("左つま先ＩＫ", "toe IK_L"),
    ("右足", "leg_R"),
    ("右ひざ", "knee_R"),
    ("右足首", "ankle_R"),
    ("右つま先", "toe_R"),
    ("右足ＩＫ", "leg IK_R"),
    ("右つま先ＩＫ", "toe IK_R"),
    ("左親指１", "thumb1_L"),
    ("左親指２", "thumb2_L"),
    ("左人指１", "fore1_L"),
    ("左人指２", "fore2_L"),
    ("左人指３", "fore3_L"),
    ("左中指１", "middle1_L"),
    ("左中指２", "middle2_L"),
    ("左中指３", "middle3_L"),
    ("左薬指１", "third1_L"),
    ("左薬指２", "third2_L"),
    ("左薬指３", "third3_L"),
    ("左小指１", "little1_L"),
    ("左小指２", "little2_L"),
    ("左小指３", "little3_L"),
    ("右親指１", "thumb1_R"),
    ("右親指２", "thumb2_R"),
    ("右人指１", "fore1_R"),
    ("右人指２", "fore2_R"),
    ("右人指３", "fore3_R"),
    ("右中指１", "middle1_R"),
    ("右中指２", "middle2_R"),
    ("右中指３", "middle3_R"),
    ("右薬指１", "third1_R"),
    ("右薬指２", "third2_R"),
    ("右薬指３", "third3_R"),
    ("右小指１", "little1_R"),
    ("右小指２", "little2_R"),
    ("右小指３", "little3_R"),
];

const MORPHS: &[(&str, &str)] = &[
    ("真面目", "serious"),
    ("困る", "sadness"),
    ("にこり", "cheerful"),
    ("怒り", "anger"),
    ("上", "go up"),
    ("下", "go down"),
    ("まばたき", "blink"),
    ("笑い", "smile"),
    ("ウィンク", "wink"),
    ("ウィンク右", "wink_R"),
    ("ウィンク２", "wink2"),
    ("ウィンク２右", "wink2_R"),
    ("はぅ", "close><"),
    ("なごみ", "calm"),
    ("びっくり", "surprise"),
    ("じと目", "doubt"),
    ("なぬ！", "confuse"),
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("ワ", "wa"),
    ("ω", "mouth_omega"),
    ("▲", "mouth_triangle"),
    ("ぺろっ", "tongue_out"),
    ("はんっ", "mouth_hun"),
    ("にやり", "grin"),
    ("瞳小", "pupil small"),
    ("照れ", "blush"),
];

lazy_static! {
    pub(crate) static ref STANDARD_NAMES: NameTables = NameTables {
        bones: BONES.iter().cloned().collect::<NameTable>(),
        morphs: MORPHS.iter().cloned().collect::<NameTable>(),
    };
}
