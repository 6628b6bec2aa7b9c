//! Service tests for CM format mappings, using in-memory repositories.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::cm::{
        CmFileFormat, CmFormatRepositoryTrait, CmFormatService, CmFormatServiceTrait,
        FormatSelector, NewVendorFormatMapping, VendorFormatEntry, VendorFormatMapping,
    };
    use crate::errors::{DatabaseError, Error, Result};
    use crate::network::{NewVendorTech, VendorTech, VendorTechEntry, VendorTechRepositoryTrait};

    struct FixedVendorTechRepository {
        pairs: Vec<VendorTech>,
    }

    #[async_trait]
    impl VendorTechRepositoryTrait for FixedVendorTechRepository {
        fn list_entries(&self) -> Result<Vec<VendorTechEntry>> {
            Ok(vec![])
        }

        fn find_by_id(&self, pair_id: i32) -> Result<Option<VendorTech>> {
            Ok(self.pairs.iter().find(|p| p.id == pair_id).cloned())
        }

        fn find_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Option<VendorTech>> {
            Ok(self
                .pairs
                .iter()
                .find(|p| p.vendor_id == vendor_id && p.tech_id == tech_id)
                .cloned())
        }

        async fn insert(&self, _new_pair: NewVendorTech) -> Result<VendorTech> {
            unimplemented!("not exercised by these tests")
        }

        async fn delete(&self, _pair_id: i32) -> Result<usize> {
            unimplemented!("not exercised by these tests")
        }
    }

    #[derive(Default)]
    struct InMemoryCmFormatRepository {
        formats: Vec<CmFileFormat>,
        mappings: Mutex<Vec<VendorFormatMapping>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl CmFormatRepositoryTrait for InMemoryCmFormatRepository {
        fn list_entries(&self) -> Result<Vec<VendorFormatEntry>> {
            Ok(vec![])
        }

        fn formats_for_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Vec<CmFileFormat>> {
            Ok(self
                .formats
                .iter()
                .filter(|f| f.vendor_id == vendor_id && f.tech_id == tech_id)
                .cloned()
                .collect())
        }

        fn find_mapping(
            &self,
            vendor_tech_id: i32,
            format_id: i32,
        ) -> Result<Option<VendorFormatMapping>> {
            Ok(self
                .mappings
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.vendor_tech_id == vendor_tech_id && m.format_id == format_id)
                .cloned())
        }

        async fn insert_mapping(
            &self,
            new_mapping: NewVendorFormatMapping,
        ) -> Result<VendorFormatMapping> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let row = VendorFormatMapping {
                id: *next,
                vendor_tech_id: new_mapping.vendor_tech_id,
                format_id: new_mapping.format_id,
            };
            self.mappings.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn delete_mapping(&self, mapping_id: i32) -> Result<usize> {
            let mut mappings = self.mappings.lock().unwrap();
            let before = mappings.len();
            mappings.retain(|m| m.id != mapping_id);
            Ok(before - mappings.len())
        }
    }

    fn service_with_fixtures() -> (CmFormatService, Arc<InMemoryCmFormatRepository>) {
        let vendor_techs = Arc::new(FixedVendorTechRepository {
            pairs: vec![VendorTech {
                id: 7,
                vendor_id: 1,
                tech_id: 2,
            }],
        });
        let formats = Arc::new(InMemoryCmFormatRepository {
            formats: vec![
                CmFileFormat {
                    id: 1,
                    vendor_id: 1,
                    tech_id: 2,
                    format_name: "BCF XML".to_string(),
                },
                CmFileFormat {
                    id: 2,
                    vendor_id: 1,
                    tech_id: 2,
                    format_name: "CM Bulk Export".to_string(),
                },
                CmFileFormat {
                    id: 3,
                    vendor_id: 2,
                    tech_id: 2,
                    format_name: "GExport".to_string(),
                },
            ],
            ..Default::default()
        });
        (
            CmFormatService::new(formats.clone(), vendor_techs),
            formats,
        )
    }

    #[test]
    fn pair_id_and_direct_selectors_agree() {
        let (svc, _repo) = service_with_fixtures();

        let by_pair_id = svc
            .get_formats(FormatSelector {
                vendor_tech_id: Some(7),
                ..Default::default()
            })
            .unwrap();
        let direct = svc
            .get_formats(FormatSelector {
                vendor_id: Some(1),
                tech_id: Some(2),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(by_pair_id, direct);
        assert_eq!(by_pair_id.len(), 2);
    }

    #[test]
    fn unresolvable_pair_id_is_not_found() {
        let (svc, _repo) = service_with_fixtures();
        let err = svc
            .get_formats(FormatSelector {
                vendor_tech_id: Some(404),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::NotFound(_))
        ));
    }

    #[test]
    fn missing_selector_is_a_validation_error() {
        let (svc, _repo) = service_with_fixtures();
        let err = svc.get_formats(FormatSelector::default()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn duplicate_mapping_conflicts() {
        let (svc, repo) = service_with_fixtures();
        let mapping = NewVendorFormatMapping {
            format_id: 1,
            vendor_tech_id: 7,
        };

        svc.create_mapping(mapping.clone()).await.unwrap();
        let err = svc.create_mapping(mapping).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        assert_eq!(repo.mappings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_mapping_is_a_noop_success() {
        let (svc, _repo) = service_with_fixtures();
        svc.delete_mapping(12345).await.unwrap();
    }
}
