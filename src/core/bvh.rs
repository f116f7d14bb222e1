use crate::config::BuildConfig;
use crate::math::AABB;
use glam::Vec3;

/// BVH node using compact representation
#[derive(Clone, Debug)]
pub enum BVHNode {
    Leaf {
        bounds: AABB,
        primitive_indices: Vec<u32>,
    },
    Internal {
        bounds: AABB,
        left: Box<BVHNode>,
        right: Box<BVHNode>,
    },
}

/// Primitive trait for objects that can be inserted into BVH
pub trait BVHPrimitive {
    fn bounds(&self) -> AABB;
    fn centroid(&self) -> Vec3 {
        self.bounds().center()
    }
}

impl BVHPrimitive for AABB {
    fn bounds(&self) -> AABB {
        *self
    }
}

/// BVH build statistics for profiling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BVHStats {
    pub num_nodes: usize,
    pub num_leaves: usize,
    pub max_depth: usize,
    pub total_primitives: usize,
    pub avg_leaf_size: f32,
}

/// Binned SAH builder
#[derive(Debug, Clone, Copy)]
pub struct BvhBuilder {
    /// Maximum primitives per leaf before splitting
    pub max_leaf_size: usize,
    /// Number of SAH buckets per axis
    pub sah_buckets: usize,
}

impl Default for BvhBuilder {
    fn default() -> Self {
        Self {
            max_leaf_size: 4,
            sah_buckets: 12,
        }
    }
}

impl From<&BuildConfig> for BvhBuilder {
    fn from(config: &BuildConfig) -> Self {
        Self {
            max_leaf_size: config.max_leaf_size.max(1),
            sah_buckets: config.sah_buckets.max(2),
        }
    }
}

impl BvhBuilder {
    /// Build BVH using SAH (Surface Area Heuristic) for optimal splits.
    /// Returns `None` when there is nothing to enclose.
    pub fn build<P: BVHPrimitive>(&self, primitives: &[P]) -> Option<BVHNode> {
        if primitives.is_empty() {
            return None;
        }
        let indices: Vec<u32> = (0..primitives.len() as u32).collect();
        Some(self.build_recursive(primitives, indices))
    }

    fn build_recursive<P: BVHPrimitive>(&self, primitives: &[P], mut indices: Vec<u32>) -> BVHNode {
        let bounds = indices.iter().fold(AABB::EMPTY, |acc, &idx| {
            acc.union(&primitives[idx as usize].bounds())
        });

        if indices.len() <= self.max_leaf_size {
            return BVHNode::Leaf {
                bounds,
                primitive_indices: indices,
            };
        }

        let (split_axis, split_pos) = self.find_best_split(primitives, &indices, &bounds);
        let mid = Self::partition_primitives(primitives, &mut indices, split_axis, split_pos);

        // If partition failed, create leaf
        if mid == 0 || mid == indices.len() {
            return BVHNode::Leaf {
                bounds,
                primitive_indices: indices,
            };
        }

        let right_indices = indices.split_off(mid);
        let left = Box::new(self.build_recursive(primitives, indices));
        let right = Box::new(self.build_recursive(primitives, right_indices));

        BVHNode::Internal {
            bounds,
            left,
            right,
        }
    }

    fn find_best_split<P: BVHPrimitive>(
        &self,
        primitives: &[P],
        indices: &[u32],
        bounds: &AABB,
    ) -> (usize, f32) {
        let mut best_cost = f32::INFINITY;
        let mut best_axis = 0;
        let mut best_pos = 0.0;

        for axis in 0..3 {
            let (cost, pos) = self.evaluate_sah_axis(primitives, indices, bounds, axis);
            if cost < best_cost {
                best_cost = cost;
                best_axis = axis;
                best_pos = pos;
            }
        }

        (best_axis, best_pos)
    }

    /// Evaluate SAH cost for a given axis using binning
    fn evaluate_sah_axis<P: BVHPrimitive>(
        &self,
        primitives: &[P],
        indices: &[u32],
        bounds: &AABB,
        axis: usize,
    ) -> (f32, f32) {
        let buckets = self.sah_buckets;
        let mut bucket_bounds: Vec<Option<AABB>> = vec![None; buckets];
        let mut bucket_counts = vec![0; buckets];

        let extent = bounds.max - bounds.min;
        let axis_extent = extent[axis];

        if axis_extent < 1e-6 {
            return (f32::INFINITY, 0.0);
        }

        for &idx in indices {
            let centroid = primitives[idx as usize].centroid();
            let offset = (centroid[axis] - bounds.min[axis]) / axis_extent;
            let bucket_idx = ((offset * buckets as f32) as usize).min(buckets - 1);

            bucket_counts[bucket_idx] += 1;
            let prim_bounds = primitives[idx as usize].bounds();
            bucket_bounds[bucket_idx] = Some(match bucket_bounds[bucket_idx] {
                Some(b) => b.union(&prim_bounds),
                None => prim_bounds,
            });
        }

        let mut best_cost = f32::INFINITY;
        let mut best_split = 0;

        for split in 1..buckets {
            let (left_bounds, left_count) =
                Self::accumulate_buckets(&bucket_bounds, &bucket_counts, 0, split);
            let (right_bounds, right_count) =
                Self::accumulate_buckets(&bucket_bounds, &bucket_counts, split, buckets);

            if let (Some(lb), Some(rb)) = (left_bounds, right_bounds) {
                let cost = sah_cost(lb.surface_area(), left_count, rb.surface_area(), right_count);

                if cost < best_cost {
                    best_cost = cost;
                    best_split = split;
                }
            }
        }

        let split_pos = bounds.min[axis] + (best_split as f32 / buckets as f32) * axis_extent;

        (best_cost, split_pos)
    }

    fn accumulate_buckets(
        bucket_bounds: &[Option<AABB>],
        bucket_counts: &[usize],
        start: usize,
        end: usize,
    ) -> (Option<AABB>, usize) {
        let mut combined_bounds: Option<AABB> = None;
        let mut total_count = 0;

        for i in start..end {
            if let Some(bounds) = bucket_bounds[i] {
                combined_bounds = Some(match combined_bounds {
                    Some(b) => b.union(&bounds),
                    None => bounds,
                });
                total_count += bucket_counts[i];
            }
        }

        (combined_bounds, total_count)
    }

    /// Partition primitives along axis at split position
    fn partition_primitives<P: BVHPrimitive>(
        primitives: &[P],
        indices: &mut [u32],
        axis: usize,
        split_pos: f32,
    ) -> usize {
        let mut left = 0;
        let mut right = indices.len();

        while left < right {
            let centroid = primitives[indices[left] as usize].centroid();
            if centroid[axis] < split_pos {
                left += 1;
            } else {
                right -= 1;
                indices.swap(left, right);
            }
        }

        left
    }
}

/// SAH cost function
fn sah_cost(left_area: f32, left_count: usize, right_area: f32, right_count: usize) -> f32 {
    const TRAVERSAL_COST: f32 = 0.125;
    const INTERSECTION_COST: f32 = 1.0;

    TRAVERSAL_COST
        + INTERSECTION_COST * (left_area * left_count as f32 + right_area * right_count as f32)
}

impl BVHNode {
    pub fn bounds(&self) -> &AABB {
        match self {
            BVHNode::Leaf { bounds, .. } => bounds,
            BVHNode::Internal { bounds, .. } => bounds,
        }
    }

    /// Gather statistics about the BVH
    pub fn stats(&self) -> BVHStats {
        let mut stats = BVHStats {
            num_nodes: 0,
            num_leaves: 0,
            max_depth: 0,
            total_primitives: 0,
            avg_leaf_size: 0.0,
        };

        self.gather_stats(&mut stats, 0);

        if stats.num_leaves > 0 {
            stats.avg_leaf_size = stats.total_primitives as f32 / stats.num_leaves as f32;
        }

        stats
    }

    fn gather_stats(&self, stats: &mut BVHStats, depth: usize) {
        stats.num_nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        match self {
            BVHNode::Leaf {
                primitive_indices, ..
            } => {
                stats.num_leaves += 1;
                stats.total_primitives += primitive_indices.len();
            }
            BVHNode::Internal { left, right, .. } => {
                left.gather_stats(stats, depth + 1);
                right.gather_stats(stats, depth + 1);
            }
        }
    }

    /// Flatten to a linear array, depth first, root at index 0.
    /// Leaf primitive indices are appended to `primitive_order`.
    pub fn flatten(&self) -> FlatBVH {
        let mut flat = FlatBVH::default();
        self.flatten_recursive(&mut flat);
        flat
    }

    fn flatten_recursive(&self, flat: &mut FlatBVH) -> u32 {
        let node_idx = flat.nodes.len() as u32;

        match self {
            BVHNode::Leaf {
                bounds,
                primitive_indices,
            } => {
                flat.nodes.push(FlatBVHNode {
                    bounds_min: bounds.min.to_array(),
                    prim_count: primitive_indices.len() as u32,
                    bounds_max: bounds.max.to_array(),
                    prim_offset: flat.primitive_order.len() as u32,
                });
                flat.primitive_order.extend_from_slice(primitive_indices);
            }
            BVHNode::Internal { bounds, left, right } => {
                // Reserve space for this node
                flat.nodes.push(FlatBVHNode::default());

                left.flatten_recursive(flat);
                let right_idx = right.flatten_recursive(flat);

                flat.nodes[node_idx as usize] = FlatBVHNode {
                    bounds_min: bounds.min.to_array(),
                    prim_count: 0, // 0 indicates internal node
                    bounds_max: bounds.max.to_array(),
                    prim_offset: right_idx,
                };
            }
        }

        node_idx
    }
}

/// Linear BVH ready for upload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatBVH {
    pub nodes: Vec<FlatBVHNode>,
    /// Primitive indices in leaf order; leaves reference ranges of this
    pub primitive_order: Vec<u32>,
}

impl FlatBVH {
    pub fn bounds(&self) -> AABB {
        self.nodes.first().map_or(AABB::EMPTY, |root| {
            AABB::new(Vec3::from_array(root.bounds_min), Vec3::from_array(root.bounds_max))
        })
    }

    /// Primitive indices referenced by leaves, in leaf order
    pub fn leaf_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.primitive_order.iter().map(|&i| i as usize)
    }
}

/// GPU-friendly flat BVH node representation
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FlatBVHNode {
    pub bounds_min: [f32; 3],
    pub prim_count: u32,      // 0 = internal node, >0 = leaf with count
    pub bounds_max: [f32; 3],
    pub prim_offset: u32,     // For leaf: first entry in primitive_order, for internal: right child offset
}
