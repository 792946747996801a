/// Test fixtures: representative JSON payloads from the DDL web services.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parsers. They reflect the real envelopes returned
/// by:
///   POST .../METADATASERVICES_DBO/OphalenCatalogus
///   POST .../ONLINEWAARNEMINGENSERVICES_DBO/OphalenWaarnemingen
///
/// Catalog response shape:
///   response.LocatieLijst[]           — locations (Code, Naam, X, Y, ...)
///   response.AquoMetadataLijst[]      — metadata combos (Grootheid, ...)
///   response.AquoMetadataLocatieLijst[] — the many-to-many join table
///
/// Note: the join table spells the key "AquoMetaData_MessageID" (capital D)
/// while the metadata list spells it "AquoMetadata_MessageID". That
/// inconsistency is the service's, not ours — parsers must handle it.

/// Catalog with two locations. HOEK carries two metadata combinations
/// (measured water level vs NAP, astronomical tide vs MSL); VLIS carries
/// one. Join order puts the HOEK/NAP row first.
pub(crate) fn fixture_catalogus_json() -> &'static str {
    r#"{
      "Succesvol": true,
      "LocatieLijst": [
        {
          "Locatie_MessageID": 1,
          "Coordinatenstelsel": "25831",
          "X": 576917.67,
          "Y": 5759136.19,
          "Naam": "Hoek van Holland",
          "Code": "HOEK"
        },
        {
          "Locatie_MessageID": 2,
          "Coordinatenstelsel": "25831",
          "X": 541518.75,
          "Y": 5699254.96,
          "Naam": "Vlissingen",
          "Code": "VLIS"
        }
      ],
      "AquoMetadataLijst": [
        {
          "AquoMetadata_MessageID": 10,
          "ProcesType": "meting",
          "Grootheid": { "Code": "WATHTE", "Omschrijving": "Waterhoogte" },
          "Groepering": { "Code": "NVT", "Omschrijving": "Niet van toepassing" },
          "Hoedanigheid": { "Code": "NAP", "Omschrijving": "t.o.v. Normaal Amsterdams Peil" },
          "Eenheid": { "Code": "cm", "Omschrijving": "centimeter" }
        },
        {
          "AquoMetadata_MessageID": 11,
          "ProcesType": "astronomisch",
          "Grootheid": { "Code": "WATHTE", "Omschrijving": "Waterhoogte" },
          "Groepering": { "Code": "GETETM2", "Omschrijving": "Getijextreem" },
          "Hoedanigheid": { "Code": "MSL", "Omschrijving": "t.o.v. Mean Sea Level" },
          "Eenheid": { "Code": "cm", "Omschrijving": "centimeter" }
        }
      ],
      "AquoMetadataLocatieLijst": [
        { "AquoMetaData_MessageID": 10, "Locatie_MessageID": 1 },
        { "AquoMetaData_MessageID": 11, "Locatie_MessageID": 1 },
        { "AquoMetaData_MessageID": 10, "Locatie_MessageID": 2 }
      ]
    }"#
}

/// Measurements for HOEK over 2020-01-01: two good values plus one carrying
/// the 999999999 missing-value sentinel.
pub(crate) fn fixture_waarnemingen_json() -> &'static str {
    r#"{
      "Succesvol": true,
      "WaarnemingenLijst": [
        {
          "Locatie": {
            "Locatie_MessageID": 1,
            "Coordinatenstelsel": "25831",
            "X": 576917.67,
            "Y": 5759136.19,
            "Naam": "Hoek van Holland",
            "Code": "HOEK"
          },
          "AquoMetadata": {
            "AquoMetadata_MessageID": 10,
            "ProcesType": "meting",
            "Grootheid": { "Code": "WATHTE", "Omschrijving": "Waterhoogte" },
            "Groepering": { "Code": "NVT", "Omschrijving": "Niet van toepassing" },
            "Hoedanigheid": { "Code": "NAP", "Omschrijving": "t.o.v. Normaal Amsterdams Peil" },
            "Eenheid": { "Code": "cm", "Omschrijving": "centimeter" }
          },
          "MetingenLijst": [
            {
              "Tijdstip": "2020-01-01T00:00:00.000+01:00",
              "Meetwaarde": { "Waarde_Numeriek": 81.0 },
              "WaarnemingMetadata": {
                "StatuswaardeLijst": ["Gecontroleerd"],
                "KwaliteitswaardecodeLijst": ["00"]
              }
            },
            {
              "Tijdstip": "2020-01-01T00:10:00.000+01:00",
              "Meetwaarde": { "Waarde_Numeriek": 78.0 },
              "WaarnemingMetadata": {
                "StatuswaardeLijst": ["Gecontroleerd"],
                "KwaliteitswaardecodeLijst": ["00"]
              }
            },
            {
              "Tijdstip": "2020-01-01T00:20:00.000+01:00",
              "Meetwaarde": { "Waarde_Numeriek": 999999999.0 },
              "WaarnemingMetadata": {
                "StatuswaardeLijst": ["Ongecontroleerd"],
                "KwaliteitswaardecodeLijst": ["99"]
              }
            }
          ]
        }
      ]
    }"#
}

/// The failure envelope the DDL returns when a query matches no data.
pub(crate) fn fixture_foutmelding_json() -> &'static str {
    r#"{
      "Succesvol": false,
      "Foutmelding": "Geen gegevens gevonden!"
    }"#
}

/// Structurally valid success envelope with an empty observation list.
pub(crate) fn fixture_lege_waarnemingen_json() -> &'static str {
    r#"{
      "Succesvol": true,
      "WaarnemingenLijst": []
    }"#
}
