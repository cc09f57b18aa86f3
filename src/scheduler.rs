use crate::config::Config;
use crate::error::{EpisodeError, GenericError, Result};
use crate::fetcher::fetch_episode;
use crate::models::{Episode, EpisodeImages};
use crate::requester::Requester;
use futures::future::join_all;
use std::future::Future;

/// Result of fetching one episode in a batch.
pub struct EpisodeOutcome<T = EpisodeImages> {
	pub episode: Episode,
	pub result: std::result::Result<T, EpisodeError>,
}

/// Splits the episodes into contiguous batches of at most `size`.
pub fn partition(episodes: &[Episode], size: usize) -> Vec<&[Episode]> {
	episodes.chunks(size.max(1)).collect()
}

/// Runs `fetch` for every episode of the batch at once and waits for all of them.
/// Outcomes come back in batch order no matter which finished first.
pub async fn run_batch_with<T, F, Fut>(batch: &[Episode], fetch: F) -> Vec<EpisodeOutcome<T>>
where
	T: Send + 'static,
	F: Fn(Episode) -> Fut,
	Fut: Future<Output = Result<T>> + Send + 'static,
{
	let handles: Vec<_> = batch
		.iter()
		.map(|episode| tokio::spawn(fetch(episode.clone())))
		.collect();

	join_all(handles)
		.await
		.into_iter()
		.zip(batch.iter())
		.map(|(joined, episode)| {
			let result = match joined {
				Ok(result) => result,
				Err(err) => Err(GenericError(format!("Worker stopped unexpectedly: {}", err)).into()),
			};
			EpisodeOutcome {
				episode: episode.clone(),
				result: result.map_err(|err| EpisodeError::new(episode, err)),
			}
		})
		.collect()
}

/// Fetches one batch of episodes, stitching each one when the config asks for it.
pub async fn run_batch(
	requester: &Requester,
	config: &Config,
	batch: &[Episode],
) -> Vec<EpisodeOutcome> {
	log::debug!("Starting batch of {} episodes", batch.len());
	run_batch_with(batch, |episode| {
		let requester = requester.clone();
		let config = config.clone();
		async move { fetch_episode(&requester, &config, &episode).await }
	})
	.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn episodes(n: u32) -> Vec<Episode> {
		(1..=n)
			.map(|id| Episode::new(id, format!("Ep {}", id), format!("/ep/{}", id)))
			.collect()
	}

	#[test]
	fn partition_counts_and_order() {
		let list = episodes(10);
		let batches = partition(&list, 4);
		assert_eq!(batches.len(), 3);
		assert_eq!(batches.iter().map(|b| b.len()).collect::<Vec<_>>(), vec![4, 4, 2]);

		let flattened: Vec<u32> = batches.iter().flat_map(|b| b.iter().map(|e| e.id)).collect();
		assert_eq!(flattened, (1..=10).collect::<Vec<_>>());
	}

	#[test]
	fn partition_covers_every_size() {
		for n in 0..20u32 {
			for k in 1..9usize {
				let list = episodes(n);
				let batches = partition(&list, k);
				assert_eq!(batches.len(), (n as usize).div_ceil(k));
				assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), n as usize);
			}
		}
	}

	#[test]
	fn zero_size_partitions_one_at_a_time() {
		let list = episodes(3);
		assert_eq!(partition(&list, 0).len(), 3);
	}

	#[tokio::test]
	async fn outcomes_keep_batch_order() {
		let list = episodes(4);
		// Later episodes finish first.
		let outcomes = run_batch_with(&list, |episode| async move {
			tokio::time::sleep(Duration::from_millis(10 * (5 - episode.id as u64))).await;
			let value: Result<u32> = Ok(episode.id * 100);
			value
		})
		.await;

		let values: Vec<u32> = outcomes.iter().map(|o| *o.result.as_ref().unwrap()).collect();
		assert_eq!(values, vec![100, 200, 300, 400]);
		assert!(outcomes.iter().all(|o| o.result.is_ok()));
	}

	#[tokio::test]
	async fn failures_are_reported_per_episode() {
		let list = episodes(3);
		let outcomes = run_batch_with(&list, |episode| async move {
			let value: Result<u32> = if episode.id == 2 {
				Err(GenericError::from("HTTP 404").into())
			} else {
				Ok(episode.id)
			};
			value
		})
		.await;

		assert!(outcomes[0].result.is_ok());
		assert!(outcomes[2].result.is_ok());
		let err = outcomes[1].result.as_ref().unwrap_err();
		assert_eq!(err.id, 2);
		assert_eq!(err.title, "Ep 2");
		assert!(err.to_string().contains("HTTP 404"));
	}
}
