//! Seed data of the test store.
//!
//! | prefix      | date       | company            | media    | device | model    |
//! |-------------|------------|--------------------|----------|--------|----------|
//! | `00000C`    | 1998-04-22 | Cisco Systems, Inc | Ethernet | Router | ISR 4000 |
//! | `00000D`    | 2002-03-22 | ACME Corp          | Wireless | Switch |          |
//! | `001B2F`    | 2005-06-01 | Müller GmbH        |          |        |          |
//! | `0050C2ABC` | 2007-01-15 | Acme Widgets       | Ethernet |        |          |
//! | `FFFFFF`    |            |                    |          |        |          |
//!
//! Plus [`BULK`] assignments `100000`, `100001`, … dated 2010-05-01 and owned by ACME Corp.

use deepmac_common::db::Database;
use deepmac_entity::{company, device, media, model, oui};
use sea_orm::{ActiveValue::Set, EntityTrait};

/// Number of assignments listed individually
pub const ASSIGNMENTS: usize = 5;

/// Number of generated assignments, for paging through
pub const BULK: u64 = 60;

pub const CISCO: i32 = 1;
pub const ACME_CORP: i32 = 2;
pub const ACME_WIDGETS: i32 = 3;
pub const MUELLER: i32 = 4;

fn company(comp_id: i32, name: &str, address: &[&str], country: &str) -> company::ActiveModel {
    let line = |n: usize| Set(address.get(n).map(|line| line.to_string()));
    company::ActiveModel {
        comp_id: Set(comp_id),
        compname: Set(Some(name.into())),
        address1: line(0),
        address2: line(1),
        address3: line(2),
        address4: line(3),
        address5: line(4),
        country: Set(Some(country.into())),
        orgcompname: Set(None),
        orgaddress1: Set(None),
        orgaddress2: Set(None),
        orgaddress3: Set(None),
        orgaddress4: Set(None),
        orgaddress5: Set(None),
        orgcountry: Set(None),
    }
}

fn assignment(
    prefix: &str,
    date: Option<&str>,
    comp_id: Option<i32>,
    media_id: Option<i32>,
    dev_id: Option<i32>,
    model_id: Option<i32>,
) -> oui::ActiveModel {
    oui::ActiveModel {
        prefix: Set(prefix.into()),
        date: Set(date.map(Into::into)),
        comp_id: Set(comp_id),
        media_id: Set(media_id),
        dev_id: Set(dev_id),
        model_id: Set(model_id),
    }
}

pub async fn seed(db: &Database) -> Result<(), anyhow::Error> {
    let mut cisco = company(
        CISCO,
        "Cisco Systems, Inc",
        &["170 West Tasman Drive", "San Jose CA 95134"],
        "US",
    );
    cisco.orgcompname = Set(Some("Cisco Holdings".into()));
    cisco.orgcountry = Set(Some("US".into()));

    company::Entity::insert_many([
        cisco,
        company(ACME_CORP, "ACME Corp", &[], "DE"),
        company(ACME_WIDGETS, "Acme Widgets", &["123 Main St"], "GB"),
        company(MUELLER, "Müller GmbH", &["Hauptstraße 1", "8000 Zürich"], "CH"),
    ])
    .exec_without_returning(db)
    .await?;

    media::Entity::insert_many([
        media::ActiveModel {
            media_id: Set(1),
            medianame: Set(Some("Ethernet".into())),
        },
        media::ActiveModel {
            media_id: Set(2),
            medianame: Set(Some("Wireless".into())),
        },
    ])
    .exec_without_returning(db)
    .await?;

    device::Entity::insert_many([
        device::ActiveModel {
            dev_id: Set(1),
            devname: Set(Some("Router".into())),
        },
        device::ActiveModel {
            dev_id: Set(2),
            devname: Set(Some("Switch".into())),
        },
    ])
    .exec_without_returning(db)
    .await?;

    model::Entity::insert(model::ActiveModel {
        model_id: Set(1),
        modelname: Set(Some("ISR 4000".into())),
    })
    .exec_without_returning(db)
    .await?;

    oui::Entity::insert_many([
        assignment("00000C", Some("1998-04-22"), Some(CISCO), Some(1), Some(1), Some(1)),
        assignment("00000D", Some("2002-03-22"), Some(ACME_CORP), Some(2), Some(2), None),
        assignment("001B2F", Some("2005-06-01"), Some(MUELLER), None, None, None),
        assignment("0050C2ABC", Some("2007-01-15"), Some(ACME_WIDGETS), Some(1), None, None),
        assignment("FFFFFF", None, None, None, None, None),
    ])
    .exec_without_returning(db)
    .await?;

    oui::Entity::insert_many((0..BULK).map(|n| {
        assignment(
            &format!("10{n:04X}"),
            Some("2010-05-01"),
            Some(ACME_CORP),
            None,
            None,
            None,
        )
    }))
    .exec_without_returning(db)
    .await?;

    log::debug!("seeded {} assignments", ASSIGNMENTS as u64 + BULK);

    Ok(())
}
