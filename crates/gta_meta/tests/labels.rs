use gta_gxt2::{error::Result as Gxt2Result, joaat, Gxt2Table};
use gta_meta::labels_from_meta;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

const CARCOLS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CVehicleModelInfoVarGlobal>
  <Kits>
    <Item>
      <kitName>1001_lcpd_modkit</kitName>
      <visibleMods>
        <Item>
          <modelName>lcpd_bumf_b3</modelName>
          <modShopLabel>LCPD_BUMF_B3</modShopLabel>
        </Item>
        <Item>
          <modelName>lcpd_bumf_b4</modelName>
          <modShopLabel>LCPD_BUMF_B4</modShopLabel>
        </Item>
        <Item>
          <modShopLabel />
        </Item>
      </visibleMods>
    </Item>
  </Kits>
  <Lights>
    <Item>
      <modShopLabel>LCPD_SPOILER</modShopLabel>
    </Item>
  </Lights>
</CVehicleModelInfoVarGlobal>
"#;

const VEHICLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CVehicleModelInfo__InitDataList>
  <InitDatas>
    <Item>
      <modelName>lcpdcruiser</modelName>
      <gameName>LCPD_CRUISER</gameName>
    </Item>
    <Item>
      <modelName>lcpdbuffalo</modelName>
      <gameName> LCPD_BUFFALO </gameName>
    </Item>
  </InitDatas>
</CVehicleModelInfo__InitDataList>
"#;

fn table() -> Gxt2Result<Gxt2Table> {
    Gxt2Table::from_entries([
        ("LCPD_BUMF_B3", "Painted Bumper w/ Protectors MkI"),
        ("LCPD_SPOILER", "Spoiler"),
        ("LCPD_CRUISER", "Cruiser"),
        ("LCPD_BUFFALO", "Buffalo"),
    ])
}

#[traced_test]
#[test]
fn mod_shop_labels() -> miette::Result<()> {
    let labels = labels_from_meta(&table()?, CARCOLS)?;

    assert_eq!(
        labels.into_iter().collect::<Vec<_>>(),
        vec![(joaat("LCPD_BUMF_B3"), "LCPD_BUMF_B3".to_string())]
    );

    Ok(())
}

#[traced_test]
#[test]
fn game_names() -> miette::Result<()> {
    let labels = labels_from_meta(&table()?, VEHICLES)?;

    assert_eq!(labels.len(), 2);
    assert_eq!(
        labels.get(&joaat("LCPD_CRUISER")).map(String::as_str),
        Some("LCPD_CRUISER")
    );
    assert_eq!(
        labels.get(&joaat("LCPD_BUFFALO")).map(String::as_str),
        Some("LCPD_BUFFALO")
    );

    Ok(())
}

#[test]
fn unrelated_document() -> miette::Result<()> {
    let labels = labels_from_meta(
        &table()?,
        "<CHandlingDataMgr><gameName>LCPD_CRUISER</gameName></CHandlingDataMgr>",
    )?;
    assert!(labels.is_empty());

    Ok(())
}

#[test]
fn malformed_document() -> Gxt2Result<()> {
    assert!(labels_from_meta(&table()?, "<CVehicleModelInfoVarGlobal><Kits></Item>").is_err());

    Ok(())
}
