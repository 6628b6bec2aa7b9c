//! Service tests for vendor/technology pairs, using an in-memory repository.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::errors::{Error, Result};
    use crate::network::{
        NewVendorTech, VendorTech, VendorTechEntry, VendorTechRepositoryTrait, VendorTechService,
        VendorTechServiceTrait,
    };

    #[derive(Default)]
    struct InMemoryVendorTechRepository {
        rows: Mutex<Vec<VendorTech>>,
        next_id: Mutex<i32>,
    }

    #[async_trait]
    impl VendorTechRepositoryTrait for InMemoryVendorTechRepository {
        fn list_entries(&self) -> Result<Vec<VendorTechEntry>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .map(|r| VendorTechEntry {
                    pk: r.id,
                    vendor: format!("vendor-{}", r.vendor_id),
                    technology: format!("tech-{}", r.tech_id),
                })
                .collect())
        }

        fn find_by_id(&self, pair_id: i32) -> Result<Option<VendorTech>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == pair_id)
                .cloned())
        }

        fn find_pair(&self, vendor_id: i32, tech_id: i32) -> Result<Option<VendorTech>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.vendor_id == vendor_id && r.tech_id == tech_id)
                .cloned())
        }

        async fn insert(&self, new_pair: NewVendorTech) -> Result<VendorTech> {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            let row = VendorTech {
                id: *next,
                vendor_id: new_pair.vendor_id,
                tech_id: new_pair.tech_id,
            };
            self.rows.lock().unwrap().push(row.clone());
            Ok(row)
        }

        async fn delete(&self, pair_id: i32) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|r| r.id != pair_id);
            Ok(before - rows.len())
        }
    }

    fn service() -> (VendorTechService, Arc<InMemoryVendorTechRepository>) {
        let repo = Arc::new(InMemoryVendorTechRepository::default());
        (VendorTechService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_then_duplicate_conflicts() {
        let (svc, repo) = service();
        let pair = NewVendorTech {
            vendor_id: 1,
            tech_id: 2,
        };

        svc.create(pair.clone()).await.unwrap();
        let err = svc.create(pair).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_vendor_different_tech_is_allowed() {
        let (svc, repo) = service();
        svc.create(NewVendorTech {
            vendor_id: 1,
            tech_id: 1,
        })
        .await
        .unwrap();
        svc.create(NewVendorTech {
            vendor_id: 1,
            tech_id: 2,
        })
        .await
        .unwrap();
        assert_eq!(repo.rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_noop_success() {
        let (svc, _repo) = service();
        svc.delete(99).await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (svc, repo) = service();
        let created = svc
            .create(NewVendorTech {
                vendor_id: 3,
                tech_id: 4,
            })
            .await
            .unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(repo.rows.lock().unwrap().is_empty());
    }
}
