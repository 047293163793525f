//! Tests for `MemoryStore` and the patient query running against it.

use std::{sync::Arc, thread};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use medrec_core::{
  Error, JoinPolicy, PatientService,
  patient::{Episode, Patient},
  store::RecordStore,
};

use crate::MemoryStore;

fn admitted() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 3, 4, 10, 15, 0).unwrap()
}

fn christopher() -> Patient {
  Patient {
    patient_id:    1,
    first_name:    "Christopher".into(),
    last_name:     "Myhill".into(),
    date_of_birth: NaiveDate::from_ymd_opt(1978, 3, 18).unwrap(),
    nhs_number:    "1234567".into(),
  }
}

fn james() -> Patient {
  Patient {
    patient_id:    2,
    first_name:    "James".into(),
    last_name:     "Cameron".into(),
    date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 16).unwrap(),
    nhs_number:    "987654".into(),
  }
}

fn episode(episode_id: i32, patient_id: i32, diagnosis: &str) -> Episode {
  Episode {
    episode_id,
    patient_id,
    admission_date: admitted(),
    diagnosis: diagnosis.into(),
  }
}

/// Two patients, one episode each; episodes inserted before their patients.
fn seeded() -> Arc<MemoryStore> {
  let store = Arc::new(MemoryStore::new());
  store.add_episode(episode(1, 1, "Headache"));
  store.add_patient(christopher());
  store.add_episode(episode(2, 2, "Itchy Knee"));
  store.add_patient(james());
  store
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[test]
fn new_store_is_empty() {
  let s = MemoryStore::new();
  assert!(s.patients().is_empty());
  assert!(s.episodes().is_empty());
  assert_eq!(s.patient_count(), 0);
  assert_eq!(s.episode_count(), 0);
}

#[test]
fn reads_preserve_insertion_order() {
  let s = MemoryStore::new();
  s.add_patient(james());
  s.add_patient(christopher());
  s.add_episode(episode(7, 1, "c"));
  s.add_episode(episode(3, 2, "a"));

  let patient_ids: Vec<i32> = s.patients().iter().map(|p| p.patient_id).collect();
  assert_eq!(patient_ids, vec![2, 1]);
  let episode_ids: Vec<i32> = s.episodes().iter().map(|e| e.episode_id).collect();
  assert_eq!(episode_ids, vec![7, 3]);
}

#[test]
fn duplicate_identifiers_are_accepted() {
  let s = MemoryStore::new();
  s.add_patient(christopher());
  s.add_patient(christopher());
  assert_eq!(s.patient_count(), 2);
}

#[test]
fn mutating_a_snapshot_leaves_the_store_intact() {
  let s = seeded();
  let mut snapshot = s.patients();
  snapshot.clear();
  snapshot.push(james());

  assert_eq!(s.patients(), vec![christopher(), james()]);
}

#[test]
fn from_records_keeps_given_order() {
  let s = MemoryStore::from_records(
    vec![james(), christopher()],
    vec![episode(1, 1, "Headache")],
  );
  assert_eq!(s.patients(), vec![james(), christopher()]);
  assert_eq!(s.episode_count(), 1);
}

#[test]
fn concurrent_appends_are_all_kept() {
  let s = Arc::new(MemoryStore::new());
  let handles: Vec<_> = (0..8)
    .map(|n| {
      let s = s.clone();
      thread::spawn(move || {
        for i in 0..50 {
          s.add_episode(episode(n * 50 + i, n, "load"));
        }
      })
    })
    .collect();
  for h in handles {
    h.join().unwrap();
  }
  assert_eq!(s.episode_count(), 400);
}

// ─── Patient query ───────────────────────────────────────────────────────────

#[test]
fn get_patient_returns_demographics_and_episode() {
  let svc = PatientService::new(seeded());

  let record = svc.get_patient(1).unwrap();
  assert_eq!(record.patient, christopher());
  assert_eq!(record.episodes.len(), 1);
  assert_eq!(record.episodes[0].patient_id, 1);
  assert_eq!(record.episodes[0].episode_id, 1);
  assert_eq!(record.episodes[0].diagnosis, "Headache");
}

#[test]
fn each_patient_gets_only_their_own_episodes() {
  let svc = PatientService::new(seeded());

  for (patient_id, episode_id) in [(1, 1), (2, 2)] {
    let record = svc.get_patient(patient_id).unwrap();
    assert_eq!(record.patient_id(), patient_id);
    assert_eq!(record.episodes.len(), 1);
    assert_eq!(record.episodes[0].patient_id, patient_id);
    assert_eq!(record.episodes[0].episode_id, episode_id);
  }

  assert_eq!(svc.get_patient(2).unwrap().episodes[0].diagnosis, "Itchy Knee");
}

#[test]
fn unknown_patient_is_not_found() {
  let svc = PatientService::new(seeded());
  assert_eq!(svc.get_patient(3), Err(Error::PatientNotFound(3)));
}

#[test]
fn patient_without_episodes_is_not_found_by_default() {
  let store = seeded();
  store.add_patient(Patient { patient_id: 5, ..james() });
  let svc = PatientService::new(store);

  assert_eq!(svc.get_patient(5), Err(Error::PatientNotFound(5)));
}

#[test]
fn outer_policy_returns_patient_without_episodes() {
  let store = seeded();
  store.add_patient(Patient { patient_id: 5, ..james() });
  let svc = PatientService::with_policy(store, JoinPolicy::Outer);

  let record = svc.get_patient(5).unwrap();
  assert_eq!(record.patient_id(), 5);
  assert!(record.episodes.is_empty());
  assert_eq!(svc.get_patient(3), Err(Error::PatientNotFound(3)));
}

#[test]
fn repeated_queries_are_equal() {
  let svc = PatientService::new(seeded());
  assert_eq!(svc.get_patient(1), svc.get_patient(1));
  assert_eq!(svc.get_patient(3), svc.get_patient(3));
}

#[test]
fn insertion_order_does_not_change_the_result() {
  let patient_first = Arc::new(MemoryStore::new());
  patient_first.add_patient(christopher());
  patient_first.add_episode(episode(1, 1, "Headache"));

  let episode_first = Arc::new(MemoryStore::new());
  episode_first.add_episode(episode(1, 1, "Headache"));
  episode_first.add_patient(christopher());

  assert_eq!(
    PatientService::new(patient_first).get_patient(1),
    PatientService::new(episode_first).get_patient(1),
  );
}

#[test]
fn later_insertions_are_visible_to_the_query() {
  let store = seeded();
  let svc = PatientService::new(store.clone());
  store.add_episode(episode(3, 1, "Migraine"));

  let diagnoses: Vec<String> = svc
    .get_patient(1)
    .unwrap()
    .episodes
    .into_iter()
    .map(|e| e.diagnosis)
    .collect();
  assert_eq!(diagnoses, vec!["Headache", "Migraine"]);
  assert_eq!(svc.get_patient(2).unwrap().episodes.len(), 1);
}
