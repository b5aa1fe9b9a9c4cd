//! Walks the line strings of a geometry.

use geodense_types::{CoordinateNode, CoordinateTree, Geom, IndexPath, LineString};

use crate::error::GeodenseError;

/// Calls `op` for every line string in the subtree of `node`, in order, passing the position of the
/// line string.
///
/// `path` is the position of `node` itself. It is extended while descending and restored on the way
/// back up. The first error stops the walk.
pub fn traverse<F, E>(node: &mut CoordinateNode, path: &mut IndexPath, op: &mut F) -> Result<(), E>
where
    F: FnMut(&mut LineString, &IndexPath) -> Result<(), E> + ?Sized,
{
    match node {
        CoordinateNode::Leaf(line) => op(line, path),
        CoordinateNode::Container(children) => {
            for (index, child) in children.iter_mut().enumerate() {
                path.push(index);
                traverse(child, path, op)?;
                path.pop();
            }
            Ok(())
        }
    }
}

/// Operation applied to a single line string by [`traverse_geometry`].
pub type LineStringOp<'a> =
    dyn FnMut(&mut LineString, &IndexPath) -> Result<(), GeodenseError> + 'a;

/// Applies `op` to all line strings of a geometry and returns the resulting geometry.
///
/// (Multi)point geometries are rejected. Members of a geometry collection are walked one by one
/// with their index prepended to the path; (multi)point members are skipped and returned unchanged.
pub fn traverse_geometry(geom: Geom, op: &mut LineStringOp) -> Result<Geom, GeodenseError> {
    traverse_geometry_at(geom, &mut IndexPath::new(), op)
}

fn traverse_geometry_at(
    geom: Geom,
    path: &mut IndexPath,
    op: &mut LineStringOp,
) -> Result<Geom, GeodenseError> {
    match geom {
        Geom::GeometryCollection(members) => {
            let mut output = Vec::with_capacity(members.len());
            for (index, member) in members.into_iter().enumerate() {
                if member.geometry_type().is_point() {
                    log::debug!(
                        "Skipping {} member {index} of geometry collection",
                        member.geometry_type()
                    );
                    output.push(member);
                    continue;
                }

                path.push(index);
                output.push(traverse_geometry_at(member, path, op)?);
                path.pop();
            }

            Ok(Geom::GeometryCollection(output))
        }
        geom => {
            let mut tree = CoordinateTree::try_from(geom)?;
            log::debug!(
                "Walking {} with {} line string(s) at {path:?}",
                tree.geometry_type(),
                tree.root().line_string_count()
            );
            traverse(tree.root_mut(), path, op)?;
            Ok(tree.into_geom()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use geodense_types::error::GeodenseTypesError;
    use geodense_types::Coordinate;

    fn line(n: usize) -> LineString {
        (0..n).map(|i| Coordinate::new(i as f64, 0.0)).collect()
    }

    fn collect_paths(geom: Geom) -> Result<(Geom, Vec<IndexPath>), GeodenseError> {
        let mut paths = vec![];
        let geom = traverse_geometry(geom, &mut |_, path| {
            paths.push(path.clone());
            Ok(())
        })?;
        Ok((geom, paths))
    }

    #[test]
    fn paths_follow_nesting() {
        let (_, paths) = collect_paths(Geom::LineString(line(2))).expect("line string");
        assert_eq!(paths, vec![IndexPath::new()]);

        let (_, paths) = collect_paths(Geom::Polygon(vec![line(4), line(4)])).expect("polygon");
        assert_eq!(paths, vec![vec![0], vec![1]]);

        let multi_polygon = Geom::MultiPolygon(vec![vec![line(4)], vec![line(4), line(4)]]);
        let (_, paths) = collect_paths(multi_polygon).expect("multipolygon");
        assert_eq!(paths, vec![vec![0, 0], vec![1, 0], vec![1, 1]]);
    }

    #[test]
    fn leaves_are_replaced_in_place() {
        let geom = Geom::MultiLineString(vec![line(2), line(3)]);
        let result = traverse_geometry(geom, &mut |line, _| {
            line.push(Coordinate::new(-1.0, -1.0));
            Ok(())
        })
        .expect("multilinestring");

        assert_matches!(
            result,
            Geom::MultiLineString(lines)
                if lines.len() == 2 && lines[0].len() == 3 && lines[1].len() == 4
        );
    }

    #[test]
    fn collection_members_are_prefixed_and_points_skipped() {
        let point = Geom::Point(Coordinate::new(1.0, 1.0));
        let geom = Geom::GeometryCollection(vec![
            point.clone(),
            Geom::LineString(line(2)),
            Geom::Polygon(vec![line(4)]),
        ]);

        let (result, paths) = collect_paths(geom).expect("collection");
        assert_eq!(paths, vec![vec![1], vec![2, 0]]);
        assert_matches!(result, Geom::GeometryCollection(members) if members[0] == point);
    }

    #[test]
    fn points_are_rejected() {
        assert_matches!(
            collect_paths(Geom::Point(Coordinate::new(0.0, 0.0))),
            Err(GeodenseError::Types(GeodenseTypesError::PointGeometry))
        );
        assert_matches!(
            collect_paths(Geom::MultiPoint(vec![Coordinate::new(0.0, 0.0)])),
            Err(GeodenseError::Types(GeodenseTypesError::PointGeometry))
        );
    }

    #[test]
    fn errors_stop_the_walk() {
        let mut calls = 0;
        let geom = Geom::MultiLineString(vec![line(2), line(2), line(2)]);
        let result = traverse_geometry(geom, &mut |_, path| {
            calls += 1;
            if path == &vec![1] {
                Err(GeodenseError::DistanceComputation(f64::NAN))
            } else {
                Ok(())
            }
        });

        assert_matches!(result, Err(GeodenseError::DistanceComputation(_)));
        assert_eq!(calls, 2);
    }
}
